pub mod imports;

mod default_styling;
pub mod theme;

pub use default_styling::DefaultStyling;
