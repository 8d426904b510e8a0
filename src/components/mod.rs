pub mod rating_badge;
pub mod results_view;
pub mod toast;
