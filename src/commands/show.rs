//! Show command implementation
//!
//! Prints each module's library with its roots grouped by category.

use std::path::Path;

use console::Style;

use crate::cli::ShowArgs;
use crate::domain::RootCategory;
use crate::error::{Result, io_error, module_not_found};
use crate::library::table::{LIBRARY_TABLE_FILE, ModuleLibrary};
use crate::library::{LibraryModel, LibraryTable};

/// Run show command
pub fn run(args: ShowArgs) -> Result<()> {
    let table_path = match args.library {
        Some(path) => path,
        None => std::env::current_dir()
            .map(|cwd| cwd.join(LIBRARY_TABLE_FILE))
            .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?,
    };
    let table = LibraryTable::load(&table_path)?;

    let modules: Vec<&ModuleLibrary> = match args.module.as_deref() {
        Some(name) => vec![
            table
                .modules
                .iter()
                .find(|m| m.module == name)
                .ok_or_else(|| module_not_found(name))?,
        ],
        None => table.modules.iter().collect(),
    };

    if modules.is_empty() {
        println!("No libraries found in {}", display_path(&table_path));
        return Ok(());
    }

    for module in modules {
        display_module(module);
        println!();
    }
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn display_module(module: &ModuleLibrary) {
    let library = &module.library;
    println!("{}", Style::new().bold().yellow().apply_to(&module.module));
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Library:"),
        library.name()
    );

    if library.is_empty() {
        println!("  {}", Style::new().dim().apply_to("(no roots)"));
        return;
    }

    for category in RootCategory::ALL {
        let roots = library.roots(category);
        if roots.is_empty() {
            continue;
        }
        println!(
            "  {} ({}):",
            Style::new().bold().apply_to(category.as_str()),
            roots.len()
        );
        for root in roots {
            println!("    {}", Style::new().cyan().apply_to(root));
        }
    }
}
