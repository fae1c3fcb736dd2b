use agora_types::protocol::{AgentCommentCreate, ContentCommentCreate};
use agora_types::view::{excerpt, format_date, format_date_short, price_label, rating_label, reviews_label, user_label};
use agora_types::{Agent, CommentView, Content, ContentKind};
use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::json;

use crate::cli::ContentKindArg;
use crate::commands::AppContext;

fn table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Categories are stored among the tags.
fn in_category(agent: &Agent, category: Option<&str>) -> bool {
    category.map_or(true, |c| agent.tags.iter().any(|t| t.eq_ignore_ascii_case(c)))
}

fn filter_agents(agents: Vec<Agent>, search: Option<&str>, category: Option<&str>) -> Vec<Agent> {
    agents
        .into_iter()
        .filter(|a| a.matches_query(search.unwrap_or_default()) && in_category(a, category))
        .collect()
}

pub async fn list_agents(
    ctx: &AppContext,
    search: Option<&str>,
    category: Option<&str>,
    mine: bool,
    json: bool,
) -> Result<()> {
    let agents = if mine {
        ctx.require_user().await?;
        ctx.client.my_agents().await?
    } else {
        ctx.client.agents().await?
    };
    let agents = filter_agents(agents, search, category);

    if json {
        println!("{}", serde_json::to_string_pretty(&agents)?);
        return Ok(());
    }
    if agents.is_empty() {
        println!("{}", "No agents found.".yellow());
        return Ok(());
    }

    let mut table = table();
    table.set_header(vec!["ID", "Name", "Price", "Rating", "Reviews", "Tags"]);
    for agent in &agents {
        let price = match agent.price {
            Some(p) if p > 0.0 => Cell::new(price_label(agent.price)),
            _ => Cell::new(price_label(agent.price)).fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(&agent.id),
            Cell::new(&agent.name),
            price,
            Cell::new(format!("★ {}", rating_label(agent.avg_rating))),
            Cell::new(reviews_label(agent.reviews_count)),
            Cell::new(agent.display_tags(4).join(", ")),
        ]);
    }
    println!("{table}");
    println!("\n{} agents", agents.len());
    Ok(())
}

fn print_comments(heading: &str, comments: &[CommentView]) {
    println!("\n{} ({})", heading.cyan().bold(), comments.len());
    if comments.is_empty() {
        println!("  {}", "Nothing yet.".dimmed());
    }
    for c in comments {
        let rating = c.rating.map(|r| format!(" {}", "★".repeat(r.clamp(0, 5) as usize))).unwrap_or_default();
        println!("  {} {}{}", c.author.bold(), format_date_short(&c.created_at).dimmed(), rating.yellow());
        for line in c.text.lines() {
            println!("    {}", line);
        }
    }
}

pub async fn show_agent(ctx: &AppContext, id: &str, json: bool) -> Result<()> {
    let (agent, comments, discussions) =
        futures::join!(ctx.client.agent(id), ctx.client.agent_comments(id), ctx.client.agent_discussions(id));
    let agent = agent?;
    let comments = comments.unwrap_or_else(|e| {
        tracing::warn!("Comments unavailable: {}", e);
        Vec::new()
    });
    let discussions = discussions.unwrap_or_else(|e| {
        tracing::warn!("Discussions unavailable: {}", e);
        Vec::new()
    });

    if json {
        let body = json!({ "agent": agent, "comments": comments, "discussions": discussions });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", agent.name.cyan().bold());
    println!("by {}", agent.publisher_name());
    println!("\n{}", agent.description);

    let mut table = table();
    table.add_row(vec![Cell::new("Price"), Cell::new(price_label(agent.price))]);
    table.add_row(vec![
        Cell::new("Rating"),
        Cell::new(format!("★ {} ({})", rating_label(agent.avg_rating), reviews_label(agent.reviews_count))),
    ]);
    if let Some(date) = agent.created_at.as_deref() {
        table.add_row(vec![Cell::new("Published"), Cell::new(format_date(date))]);
    }
    let tags = agent.display_tags(usize::MAX);
    if !tags.is_empty() {
        table.add_row(vec![Cell::new("Tags"), Cell::new(tags.join(", "))]);
    }
    match agent.agent_url.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(url) => table.add_row(vec![Cell::new("Download"), Cell::new(url)]),
        None => table.add_row(vec![Cell::new("Download"), Cell::new("not available").fg(Color::DarkGrey)]),
    };
    println!("{table}");

    if let Some(guide) = agent.requirements.as_deref().filter(|r| !r.trim().is_empty()) {
        println!("\n{}\n{}", "Installation and usage".cyan().bold(), guide);
    }

    if !discussions.is_empty() {
        println!("\n{}", "Discussions".cyan().bold());
        for d in &discussions {
            println!("  [{}] {}", d.id, d.display_title());
        }
    }

    let reviews: Vec<CommentView> = comments.into_iter().map(CommentView::from).collect();
    print_comments("Comments and reviews", &reviews);
    Ok(())
}

fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Article => "article",
        ContentKind::Discussion => "discussion",
        ContentKind::Other(_) => "other",
    }
}

pub async fn list_contents(ctx: &AppContext, kind: Option<ContentKindArg>, json: bool) -> Result<()> {
    let contents: Vec<Content> = match kind {
        Some(ContentKindArg::Article) => ctx.client.contents_of(ContentKind::Article).await?,
        Some(ContentKindArg::Discussion) => ctx.client.contents_of(ContentKind::Discussion).await?,
        None => ctx.client.contents().await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&contents)?);
        return Ok(());
    }
    if contents.is_empty() {
        println!("{}", "No content found.".yellow());
        return Ok(());
    }

    let mut table = table();
    table.set_header(vec!["ID", "Kind", "Title", "Author", "Date"]);
    for c in &contents {
        table.add_row(vec![
            Cell::new(&c.id),
            Cell::new(kind_label(c.kind())),
            Cell::new(excerpt(&c.display_title(), 60)),
            Cell::new(user_label(&c.user_id)),
            Cell::new(format_date_short(&c.created_at)),
        ]);
    }
    println!("{table}");
    println!("\n{} items", contents.len());
    Ok(())
}

pub async fn show_content(ctx: &AppContext, id: &str, json: bool) -> Result<()> {
    let (content, comments) = futures::join!(ctx.client.content(id), ctx.client.content_comments(id));
    let content = content?;
    let comments = comments.unwrap_or_else(|e| {
        tracing::warn!("Comments unavailable: {}", e);
        Vec::new()
    });

    if json {
        let body = json!({ "content": content, "comments": comments });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", content.display_title().cyan().bold());
    println!(
        "{} · {} · {}",
        kind_label(content.kind()),
        user_label(&content.user_id),
        format_date(&content.created_at)
    );
    if !content.tags.is_empty() {
        println!("{}", content.tags.join(", ").dimmed());
    }
    println!("\n{}", content.content);

    let replies: Vec<CommentView> = comments.into_iter().map(CommentView::from).collect();
    print_comments("Comments", &replies);
    Ok(())
}

pub async fn comment_agent(ctx: &AppContext, id: &str, text: &str) -> Result<()> {
    let comment = ctx.client.post_agent_comment(&AgentCommentCreate::new(id, text)).await?;
    println!("{} Comment {} posted on agent {}", "✓".green(), comment.id, id);
    Ok(())
}

pub async fn comment_content(ctx: &AppContext, id: &str, text: &str) -> Result<()> {
    let comment = ctx.client.post_content_comment(&ContentCommentCreate::new(id, text)).await?;
    println!("{} Comment {} posted on {}", "✓".green(), comment.id, id);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn agent(name: &str, tags: &[&str]) -> Agent {
        serde_json::from_value(json!({
            "id": name,
            "name": name,
            "description": format!("{} agent", name),
            "tags": tags,
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_agents_by_search_and_category() {
        let agents = vec![agent("Summarizer", &["NLP"]), agent("Coder", &["Development"]), agent("Translator", &["nlp"])];

        let nlp = filter_agents(agents.clone(), None, Some("NLP"));
        assert_eq!(nlp.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), ["Summarizer", "Translator"]);

        let both = filter_agents(agents.clone(), Some("trans"), Some("nlp"));
        assert_eq!(both.len(), 1);

        assert_eq!(filter_agents(agents, None, None).len(), 3);
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(kind_label(ContentKind::from_type_id(1)), "article");
        assert_eq!(kind_label(ContentKind::from_type_id(2)), "discussion");
        assert_eq!(kind_label(ContentKind::from_type_id(9)), "other");
    }
}
