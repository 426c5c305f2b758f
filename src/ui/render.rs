use crate::charts::{aggregate_by_day, scatter_plot, table_rows, tip_distribution};
use crate::stats::SummaryStats;
use crate::ui::app::{App, Panel};
use crate::ui::footer::Footer;
use crate::ui::header::ValueBoxes;
use crate::ui::layout::{body_regions, card_grid, layout_regions};
use crate::ui::options::DisplayOptions;
use crate::ui::panels::{render_bars, render_distribution, render_scatter, render_table};
use crate::ui::sidebar::Sidebar;
use crate::view::DerivedView;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let filters = app.filters().clone();
    let options = *app.options();
    let focus = app.focus();
    let maximized = app.is_maximized();
    let table_offset = app.table_offset();
    let view = app.view();

    ValueBoxes::new(&SummaryStats::from_view(view)).render(frame, header);

    frame.render_widget(Clear, body);
    let (sidebar, cards) = body_regions(body);
    frame.render_widget(Sidebar::new(&filters, &options).widget(sidebar.width), sidebar);

    if maximized {
        draw_panel(frame, cards, focus, view, &options, table_offset, true);
    } else {
        for (panel, rect) in Panel::ALL.into_iter().zip(card_grid(cards)) {
            draw_panel(frame, rect, panel, view, &options, table_offset, panel == focus);
        }
    }

    Footer::new(focus, maximized, view.len()).render(frame, footer);
}

/// Build the display adapter output for `panel` and draw it.
fn draw_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    panel: Panel,
    view: &DerivedView,
    options: &DisplayOptions,
    table_offset: usize,
    focused: bool,
) {
    match panel {
        Panel::Table => render_table(frame, area, table_rows(view), table_offset, focused),
        Panel::Scatter => {
            let spec = scatter_plot(view, options.scatter_color, options.show_size);
            render_scatter(frame, area, &spec, focused);
        }
        Panel::Distribution => {
            let spec = tip_distribution(view, options.split_by);
            render_distribution(frame, area, &spec, focused);
        }
        Panel::Bars => {
            let spec = aggregate_by_day(view, options.bar_metric, options.show_day_count);
            render_bars(frame, area, &spec, focused);
        }
    }
}
