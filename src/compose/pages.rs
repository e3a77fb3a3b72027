use chrono::{Datelike, NaiveDate};

use crate::anchors::registry::Links;
use crate::anchors::target::{AnchorHandle, AnchorTarget, Collection};
use crate::calendar::date::{DateKey, days_in_month, month_abbrev, month_name};
use crate::calendar::weeks::CalendarWeek;
use crate::compose::grid::GridSpec;
use crate::compose::page::PageComposer;
use crate::config::PlannerConfig;
use crate::draw::{Align, FontStyle, Surface};
use crate::foundation::core::Rgb8;
use crate::foundation::error::{BujoError, BujoResult};

/// Width of the week list on month pages and of linked rows on week pages.
pub const WEEK_COLUMN_WIDTH: f64 = 300.0;
/// Width of the day-number column on month pages.
pub const DAY_COLUMN_WIDTH: f64 = 60.0;
/// Gap between the week list and the day column.
pub const COLUMN_GAP: f64 = 10.0;
/// Height of list rows on month and week pages.
pub const ROW_HEIGHT: f64 = 14.0;

/// Link target for an optional feature: `None` when the feature is off, otherwise the anchor,
/// which the pre-pass must have allocated.
fn feature_link(
    enabled: bool,
    links: &Links,
    target: AnchorTarget,
) -> BujoResult<Option<AnchorHandle>> {
    if enabled {
        links.require(target).map(Some)
    } else {
        Ok(None)
    }
}

fn name_of(month: u32) -> BujoResult<&'static str> {
    month_name(month).ok_or_else(|| BujoError::validation(format!("invalid month {month}")))
}

/// Year hub: a 3-column grid of months and, when enabled, of collections.
pub fn year_page<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &PlannerConfig,
    links: &Links,
) -> BujoResult<()> {
    let layout = &cfg.layout;
    let own = links.require(AnchorTarget::Year)?;
    let mut page = PageComposer::begin(surface, layout, own)?;
    page.title(&format!("{} Bullet Journal", cfg.year))?;
    page.subtitle("Months")?;

    let mut labels = Vec::with_capacity(12);
    let mut anchors = Vec::with_capacity(12);
    for month in 1..=12 {
        labels.push(month_abbrev(month).unwrap_or("?"));
        anchors.push(Some(links.require(AnchorTarget::Month(month))?));
    }
    page.grid_links(GridSpec::default(), &labels, &anchors)?;

    if layout.show_collections {
        page.subtitle("Collections")?;
        collections_grid(&mut page, links)?;
    }
    Ok(())
}

fn collections_grid<S: Surface + ?Sized>(
    page: &mut PageComposer<'_, S>,
    links: &Links,
) -> BujoResult<()> {
    let labels: Vec<&str> = Collection::ALL.iter().map(|c| c.label()).collect();
    let anchors = Collection::ALL
        .iter()
        .map(|&c| links.require(AnchorTarget::Collection(c)).map(Some))
        .collect::<BujoResult<Vec<_>>>()?;
    page.grid_links(GridSpec::default(), &labels, &anchors)?;
    Ok(())
}

/// Month page: week list on the left, day numbers on the right, columns positioned
/// independently.
pub fn month_page<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &PlannerConfig,
    links: &Links,
    month: u32,
    weeks: &[CalendarWeek],
) -> BujoResult<()> {
    let layout = &cfg.layout;
    let own = links.require(AnchorTarget::Month(month))?;
    let mut page = PageComposer::begin(surface, layout, own)?;
    page.nav(links.year(), None)?;
    page.title(&format!("{} {}", name_of(month)?, cfg.year))?;

    page.surface().set_font(FontStyle::Regular, layout.body_size);
    page.surface().set_text_color(Rgb8::BLACK);
    let top = page.cursor();

    for (index, week) in weeks.iter().enumerate() {
        let label = format!(
            "Week {}  ({} \u{2013} {})",
            index + 1,
            week.first().format("%b %d"),
            week.last().format("%b %d")
        );
        let link = feature_link(
            layout.show_weeks,
            links,
            AnchorTarget::Week { month, index },
        )?;
        page.row(
            layout.margin,
            WEEK_COLUMN_WIDTH,
            ROW_HEIGHT,
            &label,
            Align::Left,
            link,
        )?;
    }

    page.set_cursor(top);
    let day_x = layout.margin + WEEK_COLUMN_WIDTH + COLUMN_GAP;
    for day in 1..=days_in_month(cfg.year, month)? {
        let key = DateKey::new(cfg.year, month, day)?;
        let link = feature_link(layout.show_days, links, AnchorTarget::Day(key))?;
        page.row(
            day_x,
            DAY_COLUMN_WIDTH,
            ROW_HEIGHT,
            &format!("{day:>2}"),
            Align::Right,
            link,
        )?;
    }
    Ok(())
}

/// Week page: the seven dates, in-month ones linked to their day pages, the rest muted and
/// unlinked.
pub fn week_page<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &PlannerConfig,
    links: &Links,
    month: u32,
    index: usize,
    week: &CalendarWeek,
) -> BujoResult<()> {
    let layout = &cfg.layout;
    let own = links.require(AnchorTarget::Week { month, index })?;
    let mut page = PageComposer::begin(surface, layout, own)?;
    page.nav(links.year(), links.month(month))?;
    page.title(&format!("{} \u{2013} Week {}", name_of(month)?, index + 1))?;

    page.surface().set_font(FontStyle::Regular, layout.body_size);
    for date in week.days() {
        let in_month = date.year() == cfg.year && date.month() == month;
        let color = if in_month { Rgb8::BLACK } else { Rgb8::MUTED };
        page.surface().set_text_color(color);
        let link = feature_link(
            layout.show_days && in_month,
            links,
            AnchorTarget::Day(DateKey::from(*date)),
        )?;
        page.row(
            layout.margin,
            WEEK_COLUMN_WIDTH,
            ROW_HEIGHT,
            &date.format("%a %b %d").to_string(),
            Align::Left,
            link,
        )?;
    }
    page.surface().set_text_color(Rgb8::BLACK);
    Ok(())
}

/// Day page: nav, title, dot grid. `back` is the owning week's anchor.
pub fn day_page<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &PlannerConfig,
    links: &Links,
    date: NaiveDate,
    back: Option<AnchorHandle>,
) -> BujoResult<()> {
    let own = links.require(AnchorTarget::Day(DateKey::from(date)))?;
    let mut page = PageComposer::begin(surface, &cfg.layout, own)?;
    page.nav(links.year(), back)?;
    page.title(&date.format("%a, %b %d, %Y").to_string())?;
    page.dot_grid()?;
    Ok(())
}

/// Collections hub: a grid linking every collection.
pub fn collections_hub_page<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &PlannerConfig,
    links: &Links,
) -> BujoResult<()> {
    let own = links.require(AnchorTarget::CollectionsHub)?;
    let mut page = PageComposer::begin(surface, &cfg.layout, own)?;
    page.nav(links.year(), None)?;
    page.title("Collections")?;
    collections_grid(&mut page, links)
}

/// Collection page: nav back to the hub, title, dot grid.
pub fn collection_page<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &PlannerConfig,
    links: &Links,
    collection: Collection,
) -> BujoResult<()> {
    let own = links.require(AnchorTarget::Collection(collection))?;
    let mut page = PageComposer::begin(surface, &cfg.layout, own)?;
    page.nav(links.year(), links.collections_hub())?;
    page.title(collection.label())?;
    page.dot_grid()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/pages.rs"]
mod tests;
