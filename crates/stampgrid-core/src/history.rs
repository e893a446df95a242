use stampgrid_model::{Build, BuildNumber, BuilderInfo};

use crate::StatusBackend;

/// Lazy newest-to-oldest walk over one builder's builds.
///
/// Each step asks the backend for a single build, so stopping early never reads
/// older history. The walk ends at build 0 or at the first number the backend
/// no longer has.
pub struct BuildHistory<'a, B: ?Sized> {
    backend: &'a B,
    builder: &'a str,
    next: Option<BuildNumber>,
}

impl<'a, B> BuildHistory<'a, B>
where
    B: StatusBackend + ?Sized,
{
    pub fn new(backend: &'a B, builder: &'a BuilderInfo) -> Self {
        Self {
            backend,
            builder: &builder.name,
            next: builder.latest_build,
        }
    }
}

impl<B> Iterator for BuildHistory<'_, B>
where
    B: StatusBackend + ?Sized,
{
    type Item = Build;

    fn next(&mut self) -> Option<Build> {
        let number = self.next.take()?;
        let build = self.backend.build(self.builder, number)?;
        self.next = build.previous_number();
        Some(build)
    }
}
