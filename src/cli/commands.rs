use std::io::Write;
use std::path::Path;

use crate::app::{AppContext, Result};
use crate::render::{format_review_date, paginate, star_glyphs, NO_REVIEWS_MESSAGE};
use crate::widget::{Launcher, ReviewAction, WidgetSession};

/// Mount the widget into a fresh page and write it to `output` or stdout.
///
/// The page is written even when initialization fails, showing the error
/// state; the error is still returned.
pub async fn render_page(
    ctx: &AppContext,
    entity_id: Option<&str>,
    output: Option<&Path>,
    launcher: Option<&dyn Launcher>,
) -> Result<()> {
    let config = ctx.widget_config(entity_id)?;
    let mut document = ctx.new_document();
    let mounted = ctx.widget.mount(&config, &mut document).await;
    let html = document.to_html();

    match output {
        Some(path) => {
            std::fs::write(path, html)?;
            eprintln!("Wrote {}", path.display());
            if let Some(launcher) = launcher {
                launcher.open(&path.to_string_lossy())?;
            }
        }
        None => {
            std::io::stdout().write_all(html.as_bytes())?;
        }
    }

    mounted.map(|_| ())
}

pub async fn print_summary(ctx: &AppContext, entity_id: Option<&str>) -> Result<()> {
    let config = ctx.widget_config(entity_id)?;
    let session = ctx.widget.init(&config).await?;
    write_summary(&mut std::io::stdout().lock(), &session)?;
    Ok(())
}

/// Open the review generation URL, or the first-party review page.
pub async fn open_review_page(
    ctx: &AppContext,
    entity_id: Option<&str>,
    first_party: bool,
    launcher: &dyn Launcher,
) -> Result<()> {
    let config = ctx.widget_config(entity_id)?;
    let entity = ctx.widget.fetch_entity(&config).await?;

    let action = if first_party {
        ReviewAction::first_party_page(&entity)
    } else {
        ReviewAction::review_generation(&entity)
    };
    action.click(launcher)
}

pub fn write_summary(out: &mut impl Write, session: &WidgetSession) -> std::io::Result<()> {
    writeln!(out, "{}", session.entity.name)?;

    let summary = &session.summary;
    if summary.is_empty() {
        writeln!(out, "{}", NO_REVIEWS_MESSAGE)?;
        return Ok(());
    }

    writeln!(
        out,
        "Total Reviews: {}  Average Rating: {:.2}  {}",
        summary.count,
        summary.average_rating,
        star_glyphs(summary.average_rating)
    )?;

    for (index, page) in paginate(&session.reviews).into_iter().enumerate() {
        writeln!(out, "\n-- Page {} --", index + 1)?;
        for review in page {
            writeln!(
                out,
                "{} {} ({}, {})",
                star_glyphs(review.rating),
                review.author_name,
                review.publisher,
                format_review_date(review.review_date.as_deref())
            )?;
            if let Some(content) = review.display_content() {
                writeln!(out, "    {}", content)?;
            }
            for comment in &review.comments {
                writeln!(out, "    > {}: {}", session.entity.name, comment.content)?;
            }
        }
    }

    Ok(())
}
