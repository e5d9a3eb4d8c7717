//! caged CLI - chord shapes, modes and quizzes on the terminal

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use caged::quiz::{QuizPreferences, QuizSession};
use caged::{
    api, chord_title, natural_sequence, render_chord, render_mode, voicing_summary, CagedLetter, ChordQuality, CliError,
    FretRange, ModeLabels, Overlays, DEFAULT_MAX_FRET,
};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "caged")]
#[command(about = "Explore CAGED chord shapes and modes on the guitar neck", long_about = None)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a chord with one CAGED shape or all five
    Chord {
        /// Root note (C, C#, D, ... B)
        root: String,

        /// major or minor
        #[arg(short, long, default_value = "major")]
        quality: ChordQuality,

        /// Shape letter (C, A, G, E, D) or "all"
        #[arg(short, long, default_value = "all")]
        shape: String,

        /// Highest fret to draw
        #[arg(long, default_value_t = DEFAULT_MAX_FRET)]
        max_fret: u8,

        /// Highlight the matching pentatonic scale
        #[arg(long)]
        scale: bool,

        /// Label every natural note
        #[arg(long)]
        all_notes: bool,

        /// Print note names instead of symbols
        #[arg(short, long)]
        names: bool,

        /// Draw the whole neck instead of framing the roots
        #[arg(long)]
        full: bool,

        /// Emit the cell grid as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw a mode across the neck
    Mode {
        /// Mode name (ionian, dorian, ... locrian)
        mode: String,

        /// Root note (C, C#, D, ... B)
        root: String,

        /// Highest fret to draw
        #[arg(long, default_value_t = DEFAULT_MAX_FRET)]
        max_fret: u8,

        /// Label cells with note names instead of degrees
        #[arg(short, long)]
        names: bool,

        /// Draw the whole neck instead of framing the roots
        #[arg(long)]
        full: bool,

        /// Emit the positions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the CAGED order starting from a chord
    Sequence {
        /// Root chord (C, A, G, E or D)
        root: CagedLetter,
    },

    /// Name the chord from its shape and position
    Quiz {
        /// Preferences file (.json, otherwise YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of questions (overrides the config file)
        #[arg(short = 'n', long)]
        count: Option<i64>,

        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Chord {
            root,
            quality,
            shape,
            max_fret,
            scale,
            all_notes,
            names,
            full,
            json,
        } => {
            let view = api::chord_view(&root, quality.as_str(), &shape)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view.cells(max_fret)?)?);
                return Ok(());
            }
            let range = if full {
                FretRange::new(0, max_fret)?
            } else {
                view.display_range(max_fret)?
            };
            debug!(start = range.start, end = range.end, "chord display range");
            let overlays = Overlays {
                show_scale: scale,
                show_all_notes: all_notes,
            };
            println!("{}", chord_title(&view));
            for voicing in view.voicings() {
                println!("  {}", voicing_summary(voicing, range));
            }
            print!("{}", render_chord(&view, range, overlays, names)?);
        }
        Commands::Mode {
            mode,
            root,
            max_fret,
            names,
            full,
            json,
        } => {
            let view = api::mode_view(&mode, &root, max_fret)?;
            if json {
                println!("{}", serde_json::to_string_pretty(view.positions())?);
                return Ok(());
            }
            let range = if full {
                FretRange::new(0, max_fret)?
            } else {
                view.display_range()?
            };
            let def = view.mode().definition();
            println!("{} {}: {}", view.root(), def.name, def.description);
            let labels = if names { ModeLabels::Notes } else { ModeLabels::Degrees };
            print!("{}", render_mode(&view, range, labels)?);
        }
        Commands::Sequence { root } => {
            let seq: Vec<String> = natural_sequence(root).iter().map(|l| l.to_string()).collect();
            println!("{}", seq.join(" "));
        }
        Commands::Quiz { config, count, seed } => {
            let mut prefs = match config {
                Some(path) => load_preferences(&path)?,
                None => QuizPreferences::default(),
            };
            if let Some(n) = count {
                prefs.question_count = n;
            }
            let quiz_config = prefs.validate()?;
            let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
            info!(seed, "starting quiz");
            let mut rng = StdRng::seed_from_u64(seed);
            let session = QuizSession::start(&quiz_config, &mut rng)?;
            run_quiz(session)?;
        }
    }
    Ok(())
}

fn load_preferences(path: &Path) -> Result<QuizPreferences, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    let prefs = if is_json {
        QuizPreferences::from_json(&source)?
    } else {
        QuizPreferences::from_yaml(&source)?
    };
    Ok(prefs)
}

fn run_quiz(mut session: QuizSession) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let total = session.questions().len();

    while let Some(question) = session.current_question().cloned() {
        let choices: Vec<String> = question.choices.iter().map(|c| c.to_string()).collect();
        println!(
            "\nQuestion {}/{}: the {} shape ({}) with its barre at fret {}.",
            question.id,
            total,
            question.shape_used,
            question.quality,
            question.position
        );
        let selected = loop {
            print!("Which chord is it? [{}] ", choices.join(" "));
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                println!("\nQuiz abandoned after {} answers.", session.answers().len());
                return Ok(());
            };
            match line?.parse::<CagedLetter>() {
                Ok(letter) => break letter,
                Err(e) => println!("{}", e),
            }
        };
        let answer = session.submit(selected)?;
        if answer.is_correct {
            println!("Correct!");
        } else {
            println!("No, it was {}{}.", question.correct_answer, question.quality.suffix());
        }
    }

    let summary = session.summary();
    println!(
        "\nScore: {}/{} ({}%)",
        summary.correct, summary.total, summary.percentage
    );
    Ok(())
}
