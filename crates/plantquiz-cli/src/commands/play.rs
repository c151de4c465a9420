//! The `plantquiz play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use plantquiz_core::catalog::{load_catalog, practice_plants};
use plantquiz_core::config::load_config_from;
use plantquiz_core::images::DirectoryImageSource;
use plantquiz_core::model::{AnswerCheck, Plant, SessionSummary};
use plantquiz_core::progress::ProgressStore;
use plantquiz_core::session::QuizSession;
use plantquiz_core::traits::{ImageSource, ProgressBackend};

/// Typed at the common-name prompt to ask for another photo.
const IMAGE_COMMAND: &str = ":image";

/// Settings for one quiz round.
#[derive(Debug, Clone)]
pub struct QuizOptions {
    /// Restrict to past mistakes and leave progress untouched.
    pub practice: bool,
    pub threshold: u8,
    pub max_image_refreshes: u32,
}

/// How a quiz round ended.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizOutcome {
    /// There were no plants to ask about.
    NothingToQuiz,
    /// Input ended before the last question.
    Aborted { answered: usize },
    Finished(SessionSummary),
}

pub fn execute(
    practice: bool,
    catalog: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    images_dir: Option<PathBuf>,
    threshold: Option<u8>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let catalog_path = catalog.unwrap_or(config.catalog);
    let plants = load_catalog(&catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;

    let store = ProgressStore::open(data_dir.unwrap_or(config.data_dir))?;
    let images = DirectoryImageSource::new(images_dir.unwrap_or(config.images_dir));

    let options = QuizOptions {
        practice,
        threshold: threshold.unwrap_or(config.threshold),
        max_image_refreshes: config.max_image_refreshes,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_quiz(
        plants,
        &store,
        &images,
        &options,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;

    Ok(())
}

/// Print `label`, then read one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn show_image<W: Write>(output: &mut W, plant: &Plant, image: Option<&PathBuf>) -> Result<()> {
    match image {
        Some(path) => writeln!(output, "Image: {}", path.display())?,
        None => writeln!(output, "No image found for {}", plant.scientific_name)?,
    }
    Ok(())
}

fn feedback(plant: &Plant, check: AnswerCheck) -> String {
    if check.all_correct() {
        return "Both correct!".to_string();
    }

    let common = if check.common_correct {
        "Common name correct".to_string()
    } else {
        format!("Common name: {}", plant.primary_common_name())
    };
    let scientific = if check.scientific_correct {
        "Scientific name correct".to_string()
    } else {
        format!("Scientific name: {}", plant.scientific_name)
    };
    format!("{common} | {scientific}")
}

/// Drive one quiz round over `input`/`output`.
///
/// Outside practice mode every answer updates the mistake set and a finished
/// round is recorded in the session history.
pub fn run_quiz<B, R, W>(
    catalog: Vec<Plant>,
    store: &ProgressStore<B>,
    images: &dyn ImageSource,
    options: &QuizOptions,
    input: &mut R,
    output: &mut W,
) -> Result<QuizOutcome>
where
    B: ProgressBackend,
    R: BufRead,
    W: Write,
{
    let plants = if options.practice {
        practice_plants(&catalog, &store.mistakes())
    } else {
        catalog
    };

    if plants.is_empty() {
        if options.practice {
            writeln!(output, "No mistakes to practice! Start the main quiz.")?;
        } else {
            writeln!(output, "The catalog has no plants.")?;
        }
        return Ok(QuizOutcome::NothingToQuiz);
    }

    let mut session = QuizSession::new(plants).with_threshold(options.threshold);
    tracing::debug!(
        "starting {} round of {} plants",
        if options.practice { "practice" } else { "main" },
        session.len()
    );

    while let Some(plant) = session.current().cloned() {
        writeln!(output)?;
        writeln!(
            output,
            "Plant {} of {} | Score: {}/{}",
            session.position() + 1,
            session.len(),
            session.total_score(),
            session.max_score_so_far()
        )?;

        let mut image = images.random_image(&plant.scientific_name);
        show_image(output, &plant, image.as_ref())?;

        let mut refreshes = 0;
        let common = loop {
            let remaining = options.max_image_refreshes.saturating_sub(refreshes);
            let label = if remaining > 0 {
                format!("Common name ({IMAGE_COMMAND} for another photo, {remaining} left): ")
            } else {
                "Common name: ".to_string()
            };

            let Some(answer) = prompt(input, output, &label)? else {
                return Ok(QuizOutcome::Aborted {
                    answered: session.position(),
                });
            };

            if answer.trim() != IMAGE_COMMAND {
                break answer;
            }
            if remaining == 0 {
                writeln!(output, "No more image changes for this plant.")?;
                continue;
            }
            refreshes += 1;
            image = images.random_image(&plant.scientific_name);
            show_image(output, &plant, image.as_ref())?;
        };

        let Some(scientific) = prompt(input, output, "Scientific name: ")? else {
            return Ok(QuizOutcome::Aborted {
                answered: session.position(),
            });
        };

        let check = session.check(&common, &scientific);
        if !options.practice {
            store.apply_answer(&plant.scientific_name, check)?;
        }
        writeln!(output, "{}", feedback(&plant, check))?;

        session.advance();
    }

    let summary = session.summary();
    writeln!(output)?;
    writeln!(output, "Done! Grade: {:.1}", summary.grade)?;
    writeln!(
        output,
        "Common names correct: {}/{}",
        summary.common_correct, summary.questions
    )?;
    writeln!(
        output,
        "Scientific names correct: {}/{}",
        summary.scientific_correct, summary.questions
    )?;
    writeln!(
        output,
        "Total: {}/{} points",
        summary.total_score, summary.max_score
    )?;

    if !options.practice {
        let previous_best = store.high_score();
        store.record_session(summary.total_score, summary.max_score, summary.grade)?;
        if summary.total_score > previous_best {
            writeln!(output, "New high score!")?;
        }
    }

    Ok(QuizOutcome::Finished(summary))
}
