//! HTML rendering for the digest email.
//!
//! Pure string templating: one styled document, one section per category,
//! one card per item. Inline CSS only, so the mail renders without external
//! assets.

use crate::report::{BusinessItem, PoliticalItem, Report, TechItem};

const DOC_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>
body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: #333;
}
.container {
    max-width: 800px;
    margin: 40px auto;
    background: white;
    border-radius: 16px;
    overflow: hidden;
    box-shadow: 0 20px 60px rgba(0,0,0,0.3);
}
.header {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 40px;
    text-align: center;
}
.header h1 {
    margin: 0;
    font-size: 36px;
    font-weight: 700;
    letter-spacing: -0.5px;
}
.header p {
    margin: 10px 0 0 0;
    opacity: 0.9;
    font-size: 16px;
}
.content {
    padding: 40px;
}
.section {
    margin-bottom: 50px;
}
.section-title {
    font-size: 24px;
    font-weight: 700;
    color: #667eea;
    margin-bottom: 25px;
    padding-bottom: 10px;
    border-bottom: 3px solid #667eea;
}
.news-item {
    background: #f8f9fa;
    border-radius: 12px;
    padding: 25px;
    margin-bottom: 20px;
    border-left: 4px solid #667eea;
}
.news-title {
    font-size: 20px;
    font-weight: 600;
    color: #1a1a1a;
    margin-bottom: 12px;
    line-height: 1.4;
}
.news-link {
    color: #667eea;
    text-decoration: none;
    font-weight: 500;
}
.news-link:hover {
    text-decoration: underline;
}
.news-meta {
    font-size: 13px;
    color: #666;
    margin-bottom: 15px;
}
.field {
    margin-bottom: 15px;
}
.field-label {
    font-weight: 600;
    color: #667eea;
    margin-bottom: 5px;
    font-size: 14px;
    text-transform: uppercase;
    letter-spacing: 0.5px;
}
.field-content {
    color: #4a5568;
    line-height: 1.7;
}
.footer {
    background: #f8f9fa;
    padding: 30px;
    text-align: center;
    color: #666;
    font-size: 14px;
}
</style>
</head>
<body>
<div class="container">
"#;

const DOC_FOOT: &str = r#"<div class="footer">
<p>📧 Daily News Digest • Curated with AI</p>
<p>Stay informed, stay ahead.</p>
</div>
</div>
</body>
</html>
"#;

/// Render the full digest document.
pub fn render_report(report: &Report) -> String {
    let generated = if report.generated_at.is_empty() {
        "Today"
    } else {
        &report.generated_at
    };

    let mut html = String::with_capacity(16 * 1024);
    html.push_str(DOC_HEAD);
    html.push_str(&format!(
        "<div class=\"header\">\n<h1>📰 Daily News Digest</h1>\n<p>{generated}</p>\n</div>\n<div class=\"content\">\n"
    ));

    html.push_str(&section(
        "🚀 Global Enterprise Tech",
        report.global_enterprise_tech.iter().map(tech_card),
    ));
    html.push_str(&section(
        "🌍 World Politics",
        report.world_politics.iter().map(political_card),
    ));
    html.push_str(&section(
        "🇮🇳 Indian Politics",
        report.indian_politics.iter().map(political_card),
    ));
    html.push_str(&section(
        "💼 Business & Market",
        report.business_market.iter().map(business_card),
    ));

    html.push_str("</div>\n");
    html.push_str(DOC_FOOT);
    html
}

fn section(title: &str, cards: impl Iterator<Item = String>) -> String {
    let mut out = format!(
        "<div class=\"section\">\n<h2 class=\"section-title\">{title}</h2>\n"
    );
    for card in cards {
        out.push_str(&card);
    }
    out.push_str("</div>\n");
    out
}

fn card(title: &str, link: &str, published: &str, fields: &str) -> String {
    format!(
        "<div class=\"news-item\">\n\
         <div class=\"news-title\"><a href=\"{link}\" class=\"news-link\">{title}</a></div>\n\
         <div class=\"news-meta\">{published}</div>\n\
         {fields}</div>\n"
    )
}

fn field(label: &str, content: &str) -> String {
    format!(
        "<div class=\"field\">\n\
         <div class=\"field-label\">{label}</div>\n\
         <div class=\"field-content\">{content}</div>\n\
         </div>\n"
    )
}

fn tech_card(item: &TechItem) -> String {
    let mut fields = String::new();
    fields.push_str(&field("Summary", &item.summary));
    fields.push_str(&field("Context", &item.context));
    if !item.related_developments.is_empty() {
        fields.push_str(&field("Related Developments", &item.related_developments));
    }
    card(&item.title, &item.link, &item.published, &fields)
}

fn political_card(item: &PoliticalItem) -> String {
    let mut fields = String::new();
    fields.push_str(&field("Summary", &item.summary));
    fields.push_str(&field("Background", &item.background));
    fields.push_str(&field("Key Players", &item.key_players));
    fields.push_str(&field("Impact Analysis", &item.impact_analysis));
    fields.push_str(&field("Complete Picture", &item.complete_picture));
    card(&item.title, &item.link, &item.published, &fields)
}

fn business_card(item: &BusinessItem) -> String {
    let mut fields = String::new();
    fields.push_str(&field("Summary", &item.summary));
    fields.push_str(&field("What It Is", &item.what_it_is));
    fields.push_str(&field("Why It Matters", &item.why_it_matters));
    fields.push_str(&field("Impact Analysis", &item.impact_analysis));
    fields.push_str(&field("Market Context", &item.market_context));
    fields.push_str(&field("Investor Perspective", &item.investor_perspective));
    card(&item.title, &item.link, &item.published, &fields)
}
