// ============================================================
// Layer 2 — ShowUseCase
// ============================================================
// The "home" view: the network a client is working with (or
// the baseline when none is given) next to the data sets that
// can be trained on.

use crate::application::context::AppContext;
use crate::application::response::{format_failure, format_show, Response};
use crate::codec;
use crate::domain::architecture::ArchitectureSpec;
use crate::domain::error::CoreResult;

pub struct ShowUseCase {
    ctx: AppContext,
}

impl ShowUseCase {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn respond(&self, network: Option<&str>) -> Response {
        match self.execute(network) {
            Ok((spec, files)) => format_show(&spec, files),
            Err(e) => format_failure(&e),
        }
    }

    pub fn execute(&self, network: Option<&str>) -> CoreResult<(ArchitectureSpec, Vec<String>)> {
        let spec = match network {
            Some(text) => codec::decode(text)?,
            None => self.ctx.factory.baseline_architecture(),
        };
        let files = self.datasets()?;
        Ok((spec, files))
    }

    /// Names of every data set in storage, sorted.
    pub fn datasets(&self) -> CoreResult<Vec<String>> {
        Ok(self.ctx.registry.list()?.into_iter().collect())
    }
}
