//! Sync command implementation
//!
//! Loads the resolution report, runs one sync pass per module against the
//! library table and writes the table back.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use console::Style;
use tracing::debug;

use crate::cli::SyncArgs;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::domain::DependencyRecord;
use crate::error::{Result, io_error, module_not_found};
use crate::library::table::LIBRARY_TABLE_FILE;
use crate::library::{Library, LibraryTable};
use crate::resolve::{ModuleReport, ResolutionReport};
use crate::sync::{CancellationToken, SyncPass, SyncReport, sync_modules};

/// Run sync command
pub fn run(config_path: Option<PathBuf>, args: SyncArgs, cancel: CancellationToken) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?;
    let config = Config::load(config_path.as_deref(), &cwd)?;

    let report = ResolutionReport::from_file(&args.report)?;
    let selected = select_modules(&report, args.module.as_deref())?;
    let base_dir = report_dir(&args.report, &cwd);

    let table_path = args
        .library
        .clone()
        .unwrap_or_else(|| cwd.join(LIBRARY_TABLE_FILE));
    let mut table = LibraryTable::load(&table_path)?;

    let pass = SyncPass::new(Diagnostics::tracing()).with_cancellation(cancel);
    let results = sync_table(&pass, &mut table, &selected, &config, &base_dir);

    let mut total = SyncReport::default();
    for (module, report) in &results {
        print_module_report(module, report);
        total.merge(report);
    }

    if args.dry_run {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("Dry run: library table not written")
        );
    } else {
        table.save(&table_path)?;
        debug!("Saved library table to {}", table_path.display());
    }

    print_summary(results.len(), &total);
    Ok(())
}

fn select_modules<'a>(
    report: &'a ResolutionReport,
    module: Option<&'a str>,
) -> Result<Vec<&'a ModuleReport>> {
    let Some(name) = module else {
        return Ok(report.modules.iter().collect());
    };
    let matching: Vec<&ModuleReport> = report.entries(name).collect();
    if matching.is_empty() {
        return Err(module_not_found(name));
    }
    Ok(matching)
}

/// Directory relative artifact paths are resolved against
fn report_dir(report: &Path, cwd: &Path) -> PathBuf {
    match report.parent() {
        Some(parent) if parent.is_absolute() => parent.to_path_buf(),
        Some(parent) => cwd.join(parent),
        None => cwd.to_path_buf(),
    }
}

/// Run one pass per selected module, each against its own library.
///
/// A module listed more than once in the report gets one pass over all of
/// its entries, in report order. Results follow the order modules appear in
/// the library table.
fn sync_table(
    pass: &SyncPass,
    table: &mut LibraryTable,
    selected: &[&ModuleReport],
    config: &Config,
    base_dir: &Path,
) -> Vec<(String, SyncReport)> {
    let mut pending: HashMap<&str, Vec<DependencyRecord>> = HashMap::new();
    for module in selected {
        let library_name = module.library.as_deref().unwrap_or(&config.library_name);
        table.library_mut(&module.name, library_name);
        pending
            .entry(module.name.as_str())
            .or_default()
            .extend(module.records(&config.artifact_types, base_dir));
    }

    let mut names = Vec::new();
    let mut jobs: Vec<(Vec<DependencyRecord>, &mut Library)> = Vec::new();
    for entry in &mut table.modules {
        if let Some(records) = pending.remove(entry.module.as_str()) {
            names.push(entry.module.clone());
            jobs.push((records, &mut entry.library));
        }
    }

    names.into_iter().zip(sync_modules(pass, jobs)).collect()
}

fn print_module_report(module: &str, report: &SyncReport) {
    let mut line = format!(
        "  {} {} registered, {} already present",
        Style::new().bold().yellow().apply_to(module),
        report.registered,
        report.duplicates
    );
    if report.warnings() > 0 {
        line.push_str(&format!(
            ", {}",
            Style::new()
                .red()
                .apply_to(format!("{} not found", report.warnings()))
        ));
    }
    if report.failed {
        line.push_str(&format!(" {}", Style::new().red().apply_to("(failed)")));
    } else if report.cancelled {
        line.push_str(" (cancelled)");
    }
    println!("{line}");
}

fn print_summary(modules: usize, total: &SyncReport) {
    if total.failed {
        println!(
            "{}",
            Style::new()
                .red()
                .apply_to("Sync failed for some modules, see the log above")
        );
    }
    if total.cancelled {
        println!("{}", Style::new().yellow().apply_to("Sync cancelled"));
    }
    println!(
        "{} {} root(s) across {} module(s)",
        Style::new().bold().green().apply_to("Registered"),
        total.registered,
        modules
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RootCategory;
    use crate::library::{LibraryModel, RootUrl};
    use crate::test_fixtures::{create_temp_dir, write_artifact};

    fn report_for(jar: &Path) -> ResolutionReport {
        let yaml = format!(
            r"
modules:
  - name: app
    artifacts:
      - {{ organization: acme, module: core, revision: '1.0', name: core, type: jar, path: '{}' }}
      - {{ organization: acme, module: core, revision: '1.0', name: core, type: source }}
  - name: web
    library: web-deps
    artifacts:
      - {{ organization: acme, module: core, revision: '1.0', name: core, type: jar, path: '{}' }}
",
            jar.display(),
            jar.display()
        );
        serde_yaml::from_str(&yaml).unwrap()
    }

    #[test]
    fn test_select_modules() {
        let report = report_for(Path::new("/repo/core.jar"));
        assert_eq!(select_modules(&report, None).unwrap().len(), 2);
        assert_eq!(select_modules(&report, Some("web")).unwrap()[0].name, "web");
        assert!(select_modules(&report, Some("api")).is_err());
    }

    #[test]
    fn test_select_repeated_module_returns_every_entry() {
        let yaml = "modules: [{name: app, artifacts: []}, {name: web, artifacts: []}, {name: app, artifacts: []}]";
        let report: ResolutionReport = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(select_modules(&report, Some("app")).unwrap().len(), 2);
    }

    #[test]
    fn test_report_dir() {
        let cwd = Path::new("/work");
        assert_eq!(report_dir(Path::new("r.yaml"), cwd), PathBuf::from("/work/"));
        assert_eq!(
            report_dir(Path::new("build/r.yaml"), cwd),
            PathBuf::from("/work/build")
        );
        assert_eq!(
            report_dir(Path::new("/abs/r.yaml"), cwd),
            PathBuf::from("/abs")
        );
    }

    #[test]
    fn test_sync_table_per_module_libraries() {
        let temp = create_temp_dir();
        let jar = write_artifact(temp.path(), "repo/core.jar");
        let report = report_for(&jar);
        let selected = select_modules(&report, None).unwrap();
        let mut table = LibraryTable::new();
        let pass = SyncPass::new(Diagnostics::disabled());

        let results = sync_table(&pass, &mut table, &selected, &Config::default(), temp.path());

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "app");
        assert_eq!(results[0].1.registered, 1);
        assert_eq!(results[0].1.unresolved, 1);
        assert_eq!(results[1].1.registered, 1);

        let web = table.find("web").unwrap();
        assert_eq!(web.name(), "web-deps");
        assert_eq!(web.roots(RootCategory::Classes).len(), 1);
        assert_eq!(table.find("app").unwrap().name(), "resolved");
    }

    #[test]
    fn test_sync_table_repeated_module_keeps_all_records() {
        let temp = create_temp_dir();
        let first = write_artifact(temp.path(), "repo/a.jar");
        let second = write_artifact(temp.path(), "repo/b.jar");
        let yaml = format!(
            r"
modules:
  - name: app
    artifacts:
      - {{ organization: acme, module: a, revision: '1.0', name: a, type: jar, path: '{}' }}
  - name: app
    artifacts:
      - {{ organization: acme, module: b, revision: '1.0', name: b, type: jar, path: '{}' }}
",
            first.display(),
            second.display()
        );
        let report: ResolutionReport = serde_yaml::from_str(&yaml).unwrap();
        let selected = select_modules(&report, None).unwrap();
        let mut table = LibraryTable::new();
        let pass = SyncPass::new(Diagnostics::disabled());

        let results = sync_table(&pass, &mut table, &selected, &Config::default(), temp.path());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1.registered, 2);
        let roots = table.find("app").unwrap().roots(RootCategory::Classes);
        assert_eq!(roots, [RootUrl::for_file(&first), RootUrl::for_file(&second)]);
    }

    #[test]
    fn test_sync_table_twice_is_idempotent() {
        let temp = create_temp_dir();
        let jar = write_artifact(temp.path(), "repo/core.jar");
        let report = report_for(&jar);
        let selected = select_modules(&report, Some("app")).unwrap();
        let mut table = LibraryTable::new();
        let pass = SyncPass::new(Diagnostics::disabled());

        sync_table(&pass, &mut table, &selected, &Config::default(), temp.path());
        let snapshot = table.clone();
        let results = sync_table(&pass, &mut table, &selected, &Config::default(), temp.path());

        assert_eq!(results[0].1.duplicates, 1);
        assert_eq!(table, snapshot);
    }
}
