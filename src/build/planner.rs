use crate::anchors::registry::{AnchorRegistry, Links};
use crate::anchors::target::{AnchorTarget, Collection};
use crate::calendar::date::DateKey;
use crate::calendar::weeks::weeks_of_month;
use crate::compose::pages::{
    collection_page, collections_hub_page, day_page, month_page, week_page, year_page,
};
use crate::config::PlannerConfig;
use crate::draw::Surface;
use crate::draw::pdf::{DocumentInfo, PdfSurface};
use crate::foundation::error::BujoResult;

/// Page and anchor counts for one build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct BuildStats {
    /// All pages emitted.
    pub pages: usize,
    /// Month pages (always 12).
    pub month_pages: usize,
    /// Week pages.
    pub week_pages: usize,
    /// Day pages.
    pub day_pages: usize,
    /// Hub pages (the year hub and, when enabled, the collections hub).
    pub hub_pages: usize,
    /// Collection pages.
    pub collection_pages: usize,
    /// Anchors allocated in the pre-pass.
    pub anchors: usize,
}

/// Pre-pass: allocate every anchor the configuration implies, in render order.
///
/// Week anchors exist only with week pages enabled and day anchors only with day pages enabled;
/// disabled features leave no handles to link to.
#[tracing::instrument(skip(cfg), fields(year = cfg.year))]
pub fn allocate_links(cfg: &PlannerConfig) -> BujoResult<Links> {
    let layout = &cfg.layout;
    let mut reg = AnchorRegistry::new();
    reg.allocate(AnchorTarget::Year)?;
    for month in 1..=12 {
        reg.allocate(AnchorTarget::Month(month))?;
        let weeks = weeks_of_month(cfg.year, month)?;
        if layout.show_weeks {
            for index in 0..weeks.len() {
                reg.allocate(AnchorTarget::Week { month, index })?;
            }
        }
        if layout.show_days {
            for date in weeks.iter().flat_map(|w| w.in_month(cfg.year, month)) {
                reg.allocate(AnchorTarget::Day(DateKey::from(date)))?;
            }
        }
    }
    if layout.show_collections {
        reg.allocate(AnchorTarget::CollectionsHub)?;
        for c in Collection::ALL {
            reg.allocate(AnchorTarget::Collection(c))?;
        }
    }
    tracing::debug!(anchors = reg.len(), "anchor pre-pass complete");
    Ok(reg.freeze())
}

/// Render pass: emit every page in traversal order onto `surface`.
///
/// Order: year hub, then per month the month page followed by its week pages, each week page
/// followed by the day pages of its in-month dates; finally the collections hub and collections.
#[tracing::instrument(skip_all, fields(year = cfg.year))]
pub fn render_planner<S: Surface + ?Sized>(
    cfg: &PlannerConfig,
    links: &Links,
    surface: &mut S,
) -> BujoResult<BuildStats> {
    let layout = &cfg.layout;
    let mut stats = BuildStats {
        anchors: links.len(),
        ..BuildStats::default()
    };

    year_page(surface, cfg, links)?;
    stats.hub_pages += 1;

    for month in 1..=12 {
        let weeks = weeks_of_month(cfg.year, month)?;
        month_page(surface, cfg, links, month, &weeks)?;
        stats.month_pages += 1;
        if !layout.show_weeks {
            continue;
        }
        for (index, week) in weeks.iter().enumerate() {
            week_page(surface, cfg, links, month, index, week)?;
            stats.week_pages += 1;
            if !layout.show_days {
                continue;
            }
            let back = links.week(month, index);
            for date in week.in_month(cfg.year, month) {
                day_page(surface, cfg, links, date, back)?;
                stats.day_pages += 1;
            }
        }
        tracing::debug!(month, weeks = weeks.len(), "month rendered");
    }

    if layout.show_collections {
        collections_hub_page(surface, cfg, links)?;
        stats.hub_pages += 1;
        for c in Collection::ALL {
            collection_page(surface, cfg, links, c)?;
            stats.collection_pages += 1;
        }
    }

    stats.pages = stats.hub_pages
        + stats.month_pages
        + stats.week_pages
        + stats.day_pages
        + stats.collection_pages;
    Ok(stats)
}

/// Build the complete planner PDF and write it to `cfg.output`.
///
/// Nothing is written unless every page rendered and every link resolved.
#[tracing::instrument(skip(cfg), fields(year = cfg.year, out = %cfg.output.display()))]
pub fn build_planner(cfg: &PlannerConfig) -> BujoResult<BuildStats> {
    let (pdf, stats) = render_pdf(cfg)?;
    pdf.save(&cfg.output)?;
    tracing::info!(
        pages = stats.pages,
        weeks = stats.week_pages,
        days = stats.day_pages,
        anchors = stats.anchors,
        "planner written"
    );
    Ok(stats)
}

/// Build the complete planner PDF in memory, ignoring `cfg.output`.
pub fn build_planner_bytes(cfg: &PlannerConfig) -> BujoResult<(Vec<u8>, BuildStats)> {
    let (pdf, stats) = render_pdf(cfg)?;
    Ok((pdf.to_bytes()?, stats))
}

fn render_pdf(cfg: &PlannerConfig) -> BujoResult<(PdfSurface, BuildStats)> {
    cfg.validate()?;
    let links = allocate_links(cfg)?;
    let mut pdf = PdfSurface::new(cfg.layout.page_size(), cfg.layout.font, document_info(cfg));
    let stats = render_planner(cfg, &links, &mut pdf)?;
    Ok((pdf, stats))
}

fn document_info(cfg: &PlannerConfig) -> DocumentInfo {
    DocumentInfo {
        title: format!("Bullet Journal {}", cfg.year),
        author: "bujo planner generator".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/planner.rs"]
mod tests;
