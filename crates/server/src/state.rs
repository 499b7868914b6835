use platereader_core::PlateResolver;

/// Shared application state
pub struct AppState {
    resolver: PlateResolver,
}

impl AppState {
    pub fn new(resolver: PlateResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PlateResolver {
        &self.resolver
    }
}
