//! # Model Features
//!
//! A [`Feature`] is the fixed-length model input built from one
//! `(question, context)` pair by a [`FeatureConverter`].
//!
//! ```text
//! position: 0     1 .. q    q+1    q+2 .. n-2    n-1    n .. max_seq_len-1
//! token:    [CLS] query...  [SEP]  context...    [SEP]  (padding)
//! segment:  0     0         0      1             1      0
//! mask:     1     1         1      1             1      0
//! ```

mod converter_options;
mod feature;
mod feature_converter;

#[doc(inline)]
pub use converter_options::*;
#[doc(inline)]
pub use feature::*;
#[doc(inline)]
pub use feature_converter::*;
