/// Everything the command line decides: which program image to run (the
/// built-in demo when absent), whether to start in single-step mode, and
/// any breakpoint specs to install before execution.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub program: Option<String>,
    pub step: bool,
    pub breakpoints: Vec<String>,
}
