//! Explain command implementation.

use crate::cli::ExplainArgs;
use crate::commands::utils::resolve_target;
use crate::error::Result;
use crate::ui;

/// Print the loader chain the engine would apply to `args.path`.
pub fn execute(args: ExplainArgs) -> Result<()> {
    let target = resolve_target(&args.target)?;

    let Some(rule) = target.config.rule_for(&args.path)? else {
        ui::warning(&format!(
            "No loader rule matches {}; the engine will not transform it",
            args.path.display()
        ));
        return Ok(());
    };

    println!("{} ({})", args.path.display(), target.mode);
    println!("  test: {}", rule.test);
    if let Some(exclude) = &rule.exclude {
        println!("  exclude: {exclude}");
    }
    for (index, step) in rule.chain.iter().enumerate() {
        println!("  {}. {}", index + 1, step.loader_name());
    }

    Ok(())
}
