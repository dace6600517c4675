//! Output formatting for apps (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::play::App;

/// Formats apps for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single app.
    pub fn format_app(&self, app: &App) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(app),
            OutputFormat::Table => self.table_single(app),
            OutputFormat::Markdown => self.markdown_single(app),
            OutputFormat::Csv => self.csv_apps(std::slice::from_ref(app)),
        }
    }

    /// Formats multiple apps.
    pub fn format_apps(&self, apps: &[App]) -> String {
        if apps.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No apps found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_apps(apps),
            OutputFormat::Table => self.table_apps(apps),
            OutputFormat::Markdown => self.markdown_apps(apps),
            OutputFormat::Csv => self.csv_apps(apps),
        }
    }

    // JSON formatting

    fn json_single(&self, app: &App) -> String {
        serde_json::to_string_pretty(app).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_apps(&self, apps: &[App]) -> String {
        serde_json::to_string_pretty(apps).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, app: &App) -> String {
        let mut lines = Vec::new();

        lines.push(format!("ID:        {}", app.app_id));
        lines.push(format!("Title:     {}", app.title));
        lines.push(format!("URL:       {}", app.url));

        if let Some(developer) = &app.developer {
            lines.push(format!("Developer: {}", developer));
        }

        lines.push(format!("Price:     {}", price_label(app)));

        match app.score {
            Some(score) => lines.push(format!("Score:     {:.1}/5", score)),
            None => lines.push("Score:     N/A".to_string()),
        }

        lines.join("\n")
    }

    fn table_apps(&self, apps: &[App]) -> String {
        let id_width = 36;
        let price_width = 10;
        let score_width = 6;
        let title_width = 40;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<id_width$}  {:<price_width$}  {:<score_width$}  {}",
            "ID", "Price", "Score", "Title"
        ));
        lines.push(format!(
            "{:-<id_width$}  {:-<price_width$}  {:-<score_width$}  {:-<title_width$}",
            "", "", "", ""
        ));

        for app in apps {
            let price_str = if app.is_free() { "Free".to_string() } else { format!("{:.2}", app.price.value) };

            let score_str = match app.score {
                Some(s) => format!("{:.1}", s),
                None => "N/A".to_string(),
            };

            lines.push(format!(
                "{:<id_width$}  {:>price_width$}  {:>score_width$}  {}",
                truncate(&app.app_id, id_width),
                price_str,
                score_str,
                truncate(&app.title, title_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} apps", apps.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, app: &App) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", app.title));
        lines.push(String::new());

        lines.push(format!("- **ID:** {}", app.app_id));
        lines.push(format!("- **URL:** [View on Google Play]({})", app.url));

        if let Some(developer) = &app.developer {
            lines.push(format!("- **Developer:** {}", developer));
        }

        match app.price.original {
            Some(orig) if !app.is_free() => {
                let mut price = format!("- **Price:** {:.2} ~~{:.2}~~", app.price.value, orig);
                if let Some(pct) = app.discount_percent() {
                    price.push_str(&format!(" (-{}%)", pct));
                }
                lines.push(price)
            }
            _ => lines.push(format!("- **Price:** {}", price_label(app))),
        }

        if let Some(score) = app.score {
            lines.push(format!("- **Score:** {:.1}/5", score));
        }

        lines.join("\n")
    }

    fn markdown_apps(&self, apps: &[App]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Price | Score | Title |".to_string());
        lines.push("|----|-------|-------|-------|".to_string());

        for app in apps {
            let score_str = app.score.map(|s| format!("{:.1}", s)).unwrap_or_else(|| "N/A".to_string());

            lines.push(format!(
                "| {} | {} | {} | [{}]({}) |",
                app.app_id,
                price_label(app),
                score_str,
                truncate(&app.title, 40),
                app.url
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} apps found*", apps.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "app_id,title,developer,price,original_price,free,score,url".to_string()
    }

    fn csv_apps(&self, apps: &[App]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for app in apps {
            let original = app.price.original.map(|o| o.to_string()).unwrap_or_default();
            let score = app.score.map(|s| s.to_string()).unwrap_or_default();
            let developer = app.developer.as_deref().map(Self::csv_escape).unwrap_or_default();

            lines.push(format!(
                "{},{},{},{},{},{},{},{}",
                Self::csv_escape(&app.app_id),
                Self::csv_escape(&app.title),
                developer,
                app.price.value,
                original,
                app.is_free(),
                score,
                Self::csv_escape(&app.url)
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

fn price_label(app: &App) -> String {
    if app.is_free() {
        "Free".to_string()
    } else {
        match app.price.original {
            Some(orig) => match app.discount_percent() {
                Some(pct) => format!("{} (was {:.2}, -{}%)", app.price.text, orig, pct),
                None => format!("{} (was {:.2})", app.price.text, orig),
            },
            None => app.price.text.clone(),
        }
    }
}

/// Truncates to `width` characters, marking the cut with "...".
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}
