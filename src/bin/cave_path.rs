use anyhow::{Context, Result};
use cave_path::{report, CLIArgs, ShortestPathEngine};
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    cave_path::logging::init_logging(args.verbose);

    let input_path = cave_path::resolve_cave_path(&args.input_path);
    let graph = cave_path::read_graph(&input_path).with_context(|| {
        format!(
            "Failed to read caves from given file({}).",
            input_path.display()
        )
    })?;
    if args.print_matrix {
        println!("{}", graph);
    }

    let engine = ShortestPathEngine::new(&graph);
    let result = match args.target {
        Some(target) => engine.run_to(args.source, target),
        None => engine.run(args.source),
    }
    .context("Failed to search the shortest path between given caves.")?;
    if result.is_reachable() {
        println!("{}", result);
    } else {
        eprintln!("{}", result);
    }

    if !args.no_write {
        let output_path = args
            .output
            .unwrap_or_else(|| report::solution_path(&input_path));
        report::write_solution(&output_path, &result)?;
    }

    Ok(())
}
