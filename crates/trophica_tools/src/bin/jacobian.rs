use anyhow::{bail, Context};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use trophica_core::config::{AnalysisConfig, AppConfig};
use trophica_core::init_logging;
use trophica_data::{PopulationTable, Species};
use trophica_io::read_table;
use trophica_tools::{analyze_pair, rule, COMMON_PAIRS};

/// 2x2 Jacobian stability analysis of simulated populations.
///
/// With no species the pair is chosen from an interactive menu.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Two species column names
    species: Vec<String>,

    /// Analyze the common ecological pairs in sequence
    #[arg(long, conflicts_with = "species")]
    all: bool,

    /// Print suggested pairs and exit
    #[arg(long)]
    suggest: bool,

    #[arg(short, long, default_value = "ecosystem_data.csv")]
    input: PathBuf,

    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// TOML file with an [analysis] section
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Interactive,
    Pair(String, String),
    All,
}

impl Args {
    fn mode(&self) -> anyhow::Result<Mode> {
        if self.all {
            return Ok(Mode::All);
        }
        match self.species.as_slice() {
            [] => Ok(Mode::Interactive),
            [a, b] => Ok(Mode::Pair(canonical(a), canonical(b))),
            _ => bail!("expected exactly two species names, or none for the interactive menu"),
        }
    }
}

/// Catalog spelling for known species; anything else is passed through and
/// reported missing by the analyzer.
fn canonical(name: &str) -> String {
    name.parse::<Species>()
        .map(|s| s.name().to_string())
        .unwrap_or_else(|_| name.to_string())
}

#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Quit,
    Pick(Species),
    Invalid,
}

fn parse_choice(input: &str) -> Choice {
    match input.trim().parse::<usize>() {
        Ok(0) => Choice::Quit,
        Ok(n) if n <= Species::COUNT => Choice::Pick(Species::ALL[n - 1]),
        _ => Choice::Invalid,
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    println!("============================================");
    println!("  2×2 Jacobian Analysis for Ecosystems");
    println!("  Linear Stability & Eigenvalue Analysis");
    println!("============================================\n");

    if args.suggest {
        print_suggestions();
        return Ok(());
    }

    let mode = args.mode()?;
    let settings = match &args.config {
        Some(path) => AppConfig::load(path)?.analysis,
        None => AnalysisConfig::default(),
    };
    let table = read_table(&args.input).with_context(|| {
        format!(
            "could not read {}; run the simulation first",
            args.input.display()
        )
    })?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("could not create {}", args.out_dir.display()))?;

    match mode {
        Mode::Pair(a, b) => {
            run_pair(&table, &a, &b, &args.out_dir, settings)?;
        }
        Mode::All => {
            println!("Analyzing common ecological interactions...\n");
            let mut failed = 0;
            for (a, b) in COMMON_PAIRS {
                if !run_pair(&table, a, b, &args.out_dir, settings)? {
                    failed += 1;
                }
                println!("\n{}\n", rule('-'));
            }
            println!("\nAll analyses complete!");
            if failed > 0 {
                println!("{failed} pair(s) skipped for missing species.");
            }
            println!("Check individual *_analysis.txt files for detailed results.");
        }
        Mode::Interactive => {
            let stdin = io::stdin();
            interactive(&mut stdin.lock(), &table, &args.out_dir, settings)?;
            println!("\nAnalysis complete!");
        }
    }
    Ok(())
}

/// Runs one pair. A missing species is reported and skipped (`Ok(false)`);
/// any other failure ends the run.
fn run_pair(
    table: &PopulationTable,
    a: &str,
    b: &str,
    out_dir: &Path,
    settings: AnalysisConfig,
) -> anyhow::Result<bool> {
    println!("\n{}", rule('='));
    println!("ANALYZING: {a} ↔ {b}");
    println!("{}", rule('='));

    match analyze_pair(table, a, b, out_dir, settings) {
        Ok(_) => {
            println!("\n{}", rule('='));
            Ok(true)
        }
        Err(e) if e.is_data_not_found() => {
            tracing::warn!(species_a = a, species_b = b, "Skipping pair: {e}");
            eprintln!("Error: {e}");
            eprintln!("Species may not be present in the CSV file.");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn prompt<R: BufRead>(input: &mut R, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn interactive<R: BufRead>(
    input: &mut R,
    table: &PopulationTable,
    out_dir: &Path,
    settings: AnalysisConfig,
) -> anyhow::Result<()> {
    loop {
        println!("\nAvailable species:");
        println!("Plants:     1=Wildflowers  2=Berries  3=Aspen  4=Spruce");
        println!("Herbivores: 5=Bunny  6=Deer  7=FieldMouse  8=GroundSquirrel  9=Chipmunk");
        println!("Predators:  10=Fox  11=Coyote  12=BlackBear");
        println!("(Enter 0 to quit)");

        let Some(first) = prompt(input, "\nSelect first species (1-12): ")? else {
            return Ok(());
        };
        let first = match parse_choice(&first) {
            Choice::Quit => return Ok(()),
            other => other,
        };
        let Some(second) = prompt(input, "Select second species (1-12): ")? else {
            return Ok(());
        };
        let second = match parse_choice(&second) {
            Choice::Quit => return Ok(()),
            other => other,
        };

        let (a, b) = match (first, second) {
            (Choice::Pick(a), Choice::Pick(b)) if a == b => {
                println!("Please select two different species.");
                continue;
            }
            (Choice::Pick(a), Choice::Pick(b)) => (a, b),
            _ => {
                println!("Invalid choice. Please select 1-12.");
                continue;
            }
        };

        run_pair(table, a.name(), b.name(), out_dir, settings)?;

        match prompt(input, "\nAnalyze another pair? (y/n): ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {}
            _ => return Ok(()),
        }
    }
}

fn print_suggestions() {
    println!("\nSuggested pairs to analyze:");
    println!("\nClassic Predator-Prey:");
    println!("  • Wildflowers ↔ Bunny  (plant-herbivore)");
    println!("  • Bunny ↔ Fox          (prey-predator)");
    println!("  • Deer ↔ Coyote        (large prey-predator)");
    println!("\nOmnivore Dynamics:");
    println!("  • Deer ↔ BlackBear     (prey-omnivore)");
    println!("  • Fox ↔ BlackBear      (competition?)");
    println!("\nCompetition:");
    println!("  • Bunny ↔ Deer         (herbivore competition)");
    println!("  • Fox ↔ Coyote         (carnivore competition)");
    println!("  • Wildflowers ↔ Berries (plant competition)");
}
