use jobspark_core::{JobRowView, ScoringView, SearchView};

const RULE_WIDTH: usize = 72;
const BAR_WIDTH: usize = 30;
const DESCRIPTION_PREVIEW: usize = 160;

pub fn render_search(view: &SearchView) -> Vec<String> {
    let mut lines = vec![rule("Jobs")];
    lines.push(format!(
        "Keywords: {:<30} Location: {}",
        display_or_dash(&view.term),
        display_or_dash(&view.location)
    ));

    if let Some(error) = &view.error {
        lines.push(format!("! {error}"));
    }
    if let Some(notice) = &view.notice {
        lines.push(format!("i {notice}"));
    }
    if let Some(count) = &view.results_count {
        match view.total {
            Some(total) => lines.push(format!("{count} ({total} available)")),
            None => lines.push(count.clone()),
        }
    }

    for (index, job) in view.jobs.iter().enumerate() {
        lines.extend(render_job(index + 1, job));
    }

    if view.loading {
        lines.push(if view.jobs.is_empty() {
            "Searching...".to_string()
        } else {
            "Loading more...".to_string()
        });
    } else if view.show_load_more {
        lines.push(format!("More results available: type 'more' for page {}", view.page + 1));
    } else if view.show_no_results {
        lines.push("No jobs found. Try different keywords or location.".to_string());
    }
    lines
}

fn render_job(position: usize, job: &JobRowView) -> Vec<String> {
    let mut lines = vec![format!("{position:>3}. {} @ {}", job.title, job.company)];
    let mut facts = vec![job.location.clone()];
    facts.extend(job.salary.clone());
    facts.extend(job.date_posted.as_ref().map(|date| format!("posted {date}")));
    facts.extend(job.site.as_ref().map(|site| format!("via {site}")));
    lines.push(format!("     {}", facts.join(" | ")));
    if let Some(description) = &job.description {
        lines.push(format!("     {}", preview(description, DESCRIPTION_PREVIEW)));
    }
    if let Some(url) = &job.apply_url {
        lines.push(format!("     Apply: {url}"));
    }
    lines
}

pub fn render_scoring(view: &ScoringView) -> Vec<String> {
    let mut lines = vec![rule("ATS score")];
    lines.push(match (&view.document_name, view.document_size) {
        (Some(name), Some(size)) => format!("Resume: {name} ({})", format_size(size)),
        (Some(name), None) => format!("Resume: {name}"),
        _ => "Resume: none selected (upload <path>)".to_string(),
    });
    if !view.job_description.trim().is_empty() {
        lines.push(format!(
            "Job description: {}",
            preview(&view.job_description, DESCRIPTION_PREVIEW)
        ));
    }
    if view.submitting {
        lines.push(progress_bar(view.progress_percent));
    }
    if let Some(result) = &view.result {
        lines.push(format!("Score: {:.1}/100", result.score));
        if let Some(explanation) = &result.explanation {
            lines.push(explanation.clone());
        }
    }
    lines
}

pub fn render_alert(message: &str) -> Vec<String> {
    let width = message.chars().count() + 4;
    let border = format!("+{}+", "-".repeat(width - 2));
    vec![border.clone(), format!("| {message} |"), border]
}

pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = BAR_WIDTH * usize::from(percent) / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}

fn rule(title: &str) -> String {
    let head = format!("== {title} ");
    let pad = RULE_WIDTH.saturating_sub(head.chars().count());
    format!("{head}{}", "=".repeat(pad))
}

fn display_or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

fn preview(text: &str, limit: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= limit {
        return flat;
    }
    let cut: String = flat.chars().take(limit).collect();
    format!("{}...", cut.trim_end())
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use jobspark_core::{JobRowView, ScoringResult, ScoringView, SearchView};

    use super::*;

    fn row(title: &str) -> JobRowView {
        JobRowView {
            key: format!("Acme-{title}-0"),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Pune".to_string(),
            salary: None,
            description: Some("Build   things\nthat last".to_string()),
            date_posted: Some("2024-05-01".to_string()),
            apply_url: Some("https://jobs.example.com/1".to_string()),
            site: None,
        }
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0), format!("[{}]   0%", "-".repeat(30)));
        assert_eq!(
            progress_bar(50),
            format!("[{}{}]  50%", "#".repeat(15), "-".repeat(15))
        );
        assert_eq!(progress_bar(100), format!("[{}] 100%", "#".repeat(30)));
    }

    #[test]
    fn search_lists_jobs_and_load_more_hint() {
        let view = SearchView {
            term: "engineer".to_string(),
            location: "Pune".to_string(),
            jobs: vec![row("Engineer")],
            page: 1,
            results_count: Some("Found 1 job for \"engineer\" in Pune".to_string()),
            show_load_more: true,
            ..SearchView::default()
        };
        let lines = render_search(&view);
        assert!(lines.contains(&"  1. Engineer @ Acme".to_string()));
        assert!(lines.contains(&"     Pune | posted 2024-05-01".to_string()));
        assert!(lines.contains(&"     Build things that last".to_string()));
        assert!(lines.contains(&"     Apply: https://jobs.example.com/1".to_string()));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("More results available: type 'more' for page 2")
        );
    }

    #[test]
    fn search_error_is_shown() {
        let view = SearchView {
            error: Some("HTTP error! status: 502".to_string()),
            ..SearchView::default()
        };
        assert!(render_search(&view).contains(&"! HTTP error! status: 502".to_string()));
    }

    #[test]
    fn scoring_shows_bar_only_while_submitting() {
        let mut view = ScoringView {
            document_name: Some("resume.pdf".to_string()),
            document_size: Some(2048),
            submitting: true,
            progress_percent: 40,
            ..ScoringView::default()
        };
        let lines = render_scoring(&view);
        assert!(lines.contains(&"Resume: resume.pdf (2.0 KB)".to_string()));
        assert!(lines.iter().any(|line| line.ends_with(" 40%")));

        view.submitting = false;
        view.progress_percent = 100;
        view.result = Some(ScoringResult {
            score: 82.5,
            explanation: Some("Good keyword match".to_string()),
        });
        let lines = render_scoring(&view);
        assert!(!lines.iter().any(|line| line.starts_with('[')));
        assert!(lines.contains(&"Score: 82.5/100".to_string()));
        assert!(lines.contains(&"Good keyword match".to_string()));
    }

    #[test]
    fn alert_is_boxed() {
        assert_eq!(
            render_alert("Please upload a PDF resume first"),
            vec![
                format!("+{}+", "-".repeat(34)),
                "| Please upload a PDF resume first |".to_string(),
                format!("+{}+", "-".repeat(34)),
            ]
        );
    }
}
