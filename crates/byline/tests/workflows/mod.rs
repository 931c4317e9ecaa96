use super::*;

mod batch_run;
mod export_run;
