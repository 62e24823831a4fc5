mod compare;
mod context;
mod count;
mod diff;
mod wrap;

pub use compare::{run_compare, run_compare_impl};
pub use context::{color_choice_to_mode, load_config, log_level};
pub use count::{run_count, run_count_impl};
pub use diff::{run_diff, run_diff_impl};
pub use wrap::{run_wrap, run_wrap_impl};
