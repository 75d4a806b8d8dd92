// crate modules
use crate::aggregate::TableSnapshot;
use crate::describe::IsotopeDescription;
use crate::error::{Error, Result};
use crate::isotope::Isotope;
use crate::record::{parse_record, StagedRecord};
use crate::source::IonSource;
use crate::table::{cell_index, NuclideTable};
use crate::target::Target;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// external crates
use kdam::{Bar, BarBuilder, BarExt};
use log::{debug, info, warn};

/// Default location of the target data files
pub const DEFAULT_DATA_DIR: &str = "./Data/";

/// Yield measurements for every known target on one nuclide chart
///
/// The [YieldChart] owns the [NuclideTable] and handles everything from
/// reading the target data files through to per-isotope listings.
///
/// Loading proceeds in two stages:
///
/// - Every line of every target file is tokenised and staged
/// - Staged records are converted into measurements and put on the chart
///
/// Notes:
///
/// - Target files that can not be opened or read are skipped with a warning
/// - Non-UTF-8 bytes in a line are replaced rather than failing the file
/// - Records with fewer than five fields are dropped with a warning
/// - Records that do not map onto the chart are dropped with a warning
/// - Malformed numbers are read as zero
///
/// Minimal Example:
/// ```rust, no_run
/// # use isoyield_chart::{YieldChart, IonSource};
/// let mut chart = YieldChart::new();
/// chart.load("path/to/Data/").unwrap();
///
/// // Print every measurement of Sn-132
/// chart.print_isotope_info(82, 50).unwrap();
///
/// // Aggregate yields from laser ion sources only
/// let snapshot = chart.get_table_snapshot(Some(IonSource::Trilis));
/// ```
#[derive(Debug)]
pub struct YieldChart {
    /// Chart of measurements
    table: NuclideTable,
    /// Tokenised lines awaiting conversion
    staged: Vec<StagedRecord>,
    /// Has a load been completed?
    is_loaded: bool,
    /// Directory containing `<target>.dat` files
    data_dir: PathBuf,
    /// Targets to read, in order
    targets: Vec<Target>,
    /// Disable progress bar?
    disable_progress: bool,
}

impl Default for YieldChart {
    fn default() -> Self {
        Self {
            table: NuclideTable::new(),
            staged: Vec::new(),
            is_loaded: false,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            targets: Target::ALL.to_vec(),
            disable_progress: false,
        }
    }
}

/// Counts from a completed load
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Target files read successfully
    pub files_read: usize,
    /// Target files that could not be opened
    pub files_missing: usize,
    /// Target files that opened but failed part way through reading
    pub files_failed: usize,
    /// Non-blank data lines staged across all files
    pub staged: usize,
    /// Measurements put on the chart
    pub inserted: usize,
    /// Staged records dropped as malformed or off the chart
    pub rejected: usize,
}

// ! ------------------------------------------------------------------------
// !                                Public API
// ! ------------------------------------------------------------------------

/// High level methods
impl YieldChart {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Setter for the directory used when a load is triggered implicitly
    pub fn set_data_dir<P: AsRef<Path>>(&mut self, path: P) {
        self.data_dir = path.as_ref().to_path_buf();
    }

    /// Setter for which targets to read, in order
    pub fn set_targets(&mut self, targets: &[Target]) {
        self.targets = targets.to_vec();
    }

    /// Do not print the tqdm progress indicators
    pub fn disable_progress(&mut self) {
        self.disable_progress = true;
    }

    /// Has data been loaded?
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Directory data are loaded from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read only access to the chart
    pub fn table(&self) -> &NuclideTable {
        &self.table
    }

    /// Reset and load every target file in `path`
    ///
    /// Missing or unreadable files are not fatal, that target simply
    /// contributes nothing. An empty directory loads successfully to a chart of
    /// empty cells.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadSummary> {
        self.clear();
        self.set_data_dir(path);

        info!("Loading yields from {}", self.data_dir.display());
        let mut summary = LoadSummary::default();

        for target in self.targets.clone() {
            let path = self.target_path(target);

            let file = match File::open(&path) {
                Ok(file) => file,
                Err(e) => {
                    warn!("File: {} failed to open ({e})", path.display());
                    summary.files_missing += 1;
                    continue;
                }
            };

            match Self::read_target(file, target) {
                Ok(records) => {
                    debug!("{target}: {} records", records.len());
                    summary.files_read += 1;
                    self.staged.extend(records);
                }
                Err(e) => {
                    warn!("File: {} failed to read ({e})", path.display());
                    summary.files_failed += 1;
                }
            }
        }

        summary.staged = self.staged.len();
        info!("Processing data...");
        let (inserted, rejected) = self.process_staged()?;
        summary.inserted = inserted;
        summary.rejected = rejected;

        self.table.recompute(None);
        self.is_loaded = true;

        info!("Data processed, {} yields loaded", summary.inserted);
        if summary.rejected > 0 {
            warn!("{} records rejected", summary.rejected);
        }

        Ok(summary)
    }

    /// Listing of every measurement for a physical (N, Z)
    ///
    /// Triggers a load from the current data directory if nothing has been
    /// loaded yet. The whole chart is recalculated without a filter as a side
    /// effect, so any filtered aggregates are replaced.
    pub fn describe(&mut self, n: i32, z: i32) -> Result<IsotopeDescription> {
        let index = cell_index(n, z)?;

        if !self.is_loaded {
            let path = self.data_dir.clone();
            self.load(path)?;
        }

        self.mean_yield(n, z)?;
        let cell = self
            .table
            .get(index)
            .ok_or(Error::InvalidIsotope { n, z })?;

        Ok(IsotopeDescription::new(index.isotope(), cell))
    }

    /// Print every measurement for a physical (N, Z) to stdout
    pub fn print_isotope_info(&mut self, n: i32, z: i32) -> Result<()> {
        let description = self.describe(n, z)?;
        println!("{description}");
        Ok(())
    }

    /// [describe()](YieldChart::describe) by nuclide name, e.g. `Sn132`
    pub fn describe_nuclide(&mut self, name: &str) -> Result<IsotopeDescription> {
        let isotope: Isotope = name.parse()?;
        self.describe(isotope.n, isotope.z)
    }

    /// Unfiltered mean yield for a physical (N, Z)
    ///
    /// Recalculates the whole chart without a filter first.
    pub fn mean_yield(&mut self, n: i32, z: i32) -> Result<f64> {
        self.table.recompute(None);
        let average = self.table.cell(n, z)?.average();
        debug!("Average intensity: {average}");
        Ok(average)
    }

    /// Aggregates for every cell under an ion source filter
    ///
    /// The table aggregates are left as calculated with this filter.
    pub fn get_table_snapshot(&mut self, filter: Option<IonSource>) -> TableSnapshot {
        TableSnapshot::capture(&mut self.table, filter)
    }
}

// ! ------------------------------------------------------------------------
// !                     Loading: read, stage, and convert
// ! ------------------------------------------------------------------------

impl YieldChart {
    /// Reset to an empty chart
    fn clear(&mut self) {
        self.staged.clear();
        self.table.clear();
        self.is_loaded = false;
    }

    fn target_path(&self, target: Target) -> PathBuf {
        self.data_dir.join(target.file_name())
    }

    /// Tokenise every data line of a target file
    ///
    /// The first non-blank line is a header and skipped. Nothing is staged
    /// unless the whole file is read. Lines are decoded lossily, so stray
    /// non-UTF-8 bytes in comment columns do not stop the read.
    fn read_target(file: File, target: Target) -> Result<Vec<StagedRecord>> {
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        let mut is_header = true;

        for bytes in reader.split(b'\n') {
            let bytes = bytes?;
            let line = String::from_utf8_lossy(&bytes);

            if line.trim().is_empty() {
                continue;
            }

            if is_header {
                is_header = false;
                continue;
            }

            records.push(StagedRecord::new(&line, target));
        }

        Ok(records)
    }

    /// Convert every staged record and put it on the chart
    ///
    /// Returns the number inserted and rejected. The staging list is empty
    /// afterwards.
    fn process_staged(&mut self) -> Result<(usize, usize)> {
        let staged = std::mem::take(&mut self.staged);
        let mut progress_bar = self.init_progress_bar(staged.len());

        if !self.disable_progress {
            progress_bar.refresh()?;
        };

        let mut inserted = 0;
        let mut rejected = 0;

        for record in &staged {
            progress_bar.update(1)?;

            let result = parse_record(record).and_then(|m| self.table.insert(m));
            match result {
                Ok(_) => inserted += 1,
                Err(e) => {
                    warn!("{e}, dropping {} record {:?}", record.target, record.tokens);
                    rejected += 1;
                }
            }
        }

        // need an extra line for clean spacing if the progress bar is printed
        if !self.disable_progress {
            eprintln!()
        };

        Ok((inserted, rejected))
    }

    /// Initialise the progress bar, if wanted
    fn init_progress_bar(&self, total: usize) -> Bar {
        BarBuilder::default()
            .total(total)
            .unit(" records")
            .disable(self.disable_progress)
            .bar_format("{desc}{count}/{total} records   ")
            .desc("Processing ")
            .build()
            .expect("Failed to initialise progress bar")
    }
}
