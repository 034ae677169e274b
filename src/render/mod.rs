//! Turning widget children into renderable fragments.
//!
//! - [`Child`] / [`Children`] / [`Fragment`]: the widget's input and output shapes
//! - [`Platform`]: which targets render `letterSpacing` natively
//! - [`LetterSpacingRenderer`]: native fast path or simulated spacing

mod content;
mod platform;
mod spacing;

pub use content::{Child, Children, Fragment};
pub use platform::Platform;
pub use spacing::{
    space_count, LetterSpacingRenderer, RenderStrategy, SpacingPlan, INVISIBLE_JOINER,
    LETTER_SPACING_KEY, MAX_FRAGMENT_CHARS, SCALE_CONSTANT, WORD_SEPARATOR,
};
