use clap::Args;
use serde::Serialize;

use button_codemod::codemod::Variant;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Class list to classify, e.g. "px-4 py-2 bg-red-600"
    classes: String,
}

#[derive(Serialize)]
pub struct ClassifyOutput {
    pub classes: String,
    pub variant: Variant,
    /// Whether the class list carries the `px-4 py-2` padding the migrate matcher requires.
    pub button_like: bool,
}

pub fn run(args: ClassifyArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ClassifyOutput> {
    let variant = Variant::classify(&args.classes);
    let button_like = args.classes.contains("px-4 py-2");

    Ok((
        ClassifyOutput {
            classes: args.classes,
            variant,
            button_like,
        },
        0,
    ))
}
