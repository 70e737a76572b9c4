// -----------------------------------------------------------------------------
// Modules

mod match_fields;

mod enum_kind;
mod record_kind;
mod unit_kind;

mod hook_methods;
mod operators;
mod trait_reflect;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_fields::{match_fields_impls, match_table_impls};

use enum_kind::impl_enum;
use hook_methods::get_hook_methods;
use operators::impl_operators;
use record_kind::impl_record;
use trait_reflect::impl_trait_reflect;
use unit_kind::impl_unit;
