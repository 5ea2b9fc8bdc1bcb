//! State shared by every step of a generation pass.

use crate::config::GenerationConfig;
use crate::ir::SchemaIndex;
use crate::naming::NameConverter;
use crate::traits::ValidatorBuilder;

/// Read-only inputs of a generation pass.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub index: &'a SchemaIndex<'a>,
    pub config: &'a GenerationConfig,
    pub builder: &'a dyn ValidatorBuilder,
    pub names: &'a dyn NameConverter,
}

impl<'a> Context<'a> {
    pub fn new(
        index: &'a SchemaIndex<'a>,
        config: &'a GenerationConfig,
        builder: &'a dyn ValidatorBuilder,
        names: &'a dyn NameConverter,
    ) -> Self {
        Self {
            index,
            config,
            builder,
            names,
        }
    }
}
