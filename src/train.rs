//! Train command: build features, fit the model, evaluate on held-out data.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span, warn};

use pluvio_evaluate::{evaluate, to_json, EvaluationReport, PredictionRow};
use pluvio_features::{build, split, Dataset};
use pluvio_model::{DecisionTreeModel, Regressor};
use pluvio_store::{read_records, year_file};

use crate::cli::TrainArgs;
use crate::config::PluvioConfig;

/// Run the training and evaluation pipeline.
pub fn run(args: TrainArgs) -> Result<()> {
    let _cmd = info_span!("train").entered();
    let config = PluvioConfig::load(&args.config)?;

    // 1. Load and concatenate per-year record files.
    let mut records = Vec::new();
    for year in config.data.start_year..=config.data.end_year {
        let path = year_file(&config.data.dir, year);
        if !path.exists() {
            warn!(year, path = %path.display(), "missing year file, skipping");
            continue;
        }
        let year_records =
            read_records(&path).with_context(|| format!("failed to read {}", path.display()))?;
        records.extend(year_records);
    }
    if records.is_empty() {
        bail!("no records loaded: run `pluvio fetch` first");
    }
    info!(n_records = records.len(), "records loaded");

    // 2. Build the feature table.
    let dataset = build(records).context("feature building failed")?;
    if dataset.is_empty() {
        bail!("no feature rows could be built from the loaded records");
    }
    info!(
        n_rows = dataset.len(),
        n_features = Dataset::n_features(),
        "feature table built"
    );

    // 3. Chronological split.
    let (train_set, test_set) =
        split(dataset, config.split.test_fraction).context("train/test split failed")?;
    info!(
        n_train = train_set.len(),
        n_test = test_set.len(),
        "dataset split"
    );
    let test_dates = test_set.dates();

    // 4. Fit and predict.
    let mut model = DecisionTreeModel::new(config.model.max_depth, config.model.seed);
    model
        .fit(&train_set.feature_matrix(), &train_set.targets())
        .context("model training failed")?;
    let predictions = model
        .predict(&test_set.feature_matrix())
        .context("prediction failed")?;

    // 5. Evaluate.
    let report = evaluate(&test_set.targets(), &predictions).context("evaluation failed")?;

    // 6. Report.
    print_report(&report, &test_dates, config.report.top_errors);

    if let Some(path) = args.output {
        let json = to_json(&report).context("failed to serialize report")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

/// Print the evaluation summary to stdout.
fn print_report(report: &EvaluationReport, dates: &[NaiveDate], top_n: usize) {
    println!("Top-{top_n} largest forecast errors:");
    let mut indexed: Vec<(usize, &PredictionRow)> = report.rows.iter().enumerate().collect();
    indexed.sort_by(|a, b| {
        b.1.error
            .partial_cmp(&a.1.error)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (i, row) in indexed.iter().take(top_n) {
        println!(
            "  {}  actual {:7.2}  predicted {:7.2}  error {:6.2}",
            dates[*i], row.actual, row.predicted, row.error
        );
    }

    println!("\nFirst 10 predictions:");
    for (row, date) in report.rows.iter().zip(dates).take(10) {
        println!(
            "  {}  actual {:7.2}  predicted {:7.2}  error {:6.2}",
            date, row.actual, row.predicted, row.error
        );
    }

    println!("\nMSE: {:.3}", report.mse);
    println!("R2:  {:.3}", report.r2);
}
