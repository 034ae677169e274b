//! Style fragments, attribute mapping tables and type-tag resolution.
//!
//! This module provides:
//!
//! - [`StyleMap`] / [`StyleFragment`]: property maps and the payload registered per type tag
//! - [`AttributeMapping`] / [`ComponentConfig`]: compile-time slot and attribute tables
//! - [`Resolver`] / [`ResolvedStyle`]: the cascading type-tag resolver
//!
//! Type tags work like CSS classes: `"danger large"` layers the `danger`
//! fragment and then the `large` fragment, later tags winning per property.

mod fragment;
mod mapping;
mod resolve;

pub use fragment::{merge_into, StyleFragment, StyleMap};
pub use mapping::{AttributeMapping, ComponentConfig, SlotMapping};
pub use resolve::{resolve, ResolvedStyle, Resolver};
