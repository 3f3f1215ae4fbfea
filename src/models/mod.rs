mod creator;
mod event;
mod publication;
mod reading;
mod sortable;
mod venue;
mod work;

pub use creator::*;
pub use event::*;
pub use publication::*;
pub use reading::*;
pub use sortable::*;
pub use venue::*;
pub use work::*;
