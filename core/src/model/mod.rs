pub mod classification;
pub mod page;
pub mod record;
pub mod selection;
