pub mod layout;
mod view;

pub use view::{DonutChart, DonutOptions};
