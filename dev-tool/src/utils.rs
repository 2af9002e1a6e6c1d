use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

/// Shows a spinner on stderr while `step` runs.
///
/// The spinner is cleared afterwards, the duration is logged instead.
pub(crate) fn spin_while<R>(msg: &'static str, step: impl FnOnce() -> R) -> R {
    let spinner = ProgressBar::new_spinner()
        .with_style(ProgressStyle::default_spinner().template("{msg}: {elapsed:>6} {spinner:.green}"));
    spinner.set_message(msg);
    spinner.enable_steady_tick(100);
    let res = step();
    debug!("{} took {:?}.", msg, spinner.elapsed());
    spinner.finish_and_clear();
    res
}
