use anyhow::{Context, Result};
use colored::*;
use dialoguer::Input;
use viva::client::{AgentApi, HttpAgentApi};
use viva::model::{InterviewReport, ReportResponse, RoomId};

pub async fn report(room: Option<String>, api_base: &str) -> Result<()> {
    let room = match room {
        Some(room) => room,
        None => Input::<String>::new()
            .with_prompt("Room id")
            .interact_text()
            .context("failed to read room id")?,
    };
    let room = RoomId::from(room.trim());

    let api = HttpAgentApi::new(api_base);
    let response = api
        .report(&room)
        .await
        .with_context(|| format!("failed to fetch report for {}", room))?;

    match response {
        ReportResponse::InProgress { message, .. } => {
            let message = message.unwrap_or_else(|| "Interview is still in progress.".to_owned());
            println!("{} {}", "⏳".yellow(), message.yellow());
        }
        ReportResponse::Ready(report) => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &InterviewReport) {
    println!(
        "{} {}",
        "📋 Interview report:".green().bold(),
        report.candidate_name.bold()
    );
    if !report.date.is_empty() {
        println!("   Date:     {}", report.date);
    }
    println!("   Decision: {}", decision(&report.decision));
    println!("   Average:  {:.2}", report.average_score);
    println!(
        "   Answered: {}/{}",
        report.answered_questions, report.total_questions
    );

    for (i, answer) in report.responses.iter().enumerate() {
        println!();
        println!("{} {}", format!("Q{}.", i + 1).cyan().bold(), answer.question);
        println!("   {} {}", "Answer:".dimmed(), answer.answer);
        println!("   {} {}", "Rating:".dimmed(), rating(&answer.rating));
        if let Some(followup) = &answer.followup_text {
            println!("   {} {}", "Follow-up:".dimmed(), followup);
            if let Some(reply) = &answer.followup_answer {
                println!("   {} {}", "Reply:".dimmed(), reply);
            }
        }
    }
}

fn decision(decision: &str) -> ColoredString {
    match decision {
        "HIRE" => decision.green().bold(),
        "REJECT" => decision.red().bold(),
        _ => decision.yellow().bold(),
    }
}

fn rating(rating: &str) -> ColoredString {
    match rating {
        "EXCELLENT" | "GOOD" => rating.green(),
        "SATISFACTORY" => rating.yellow(),
        "POOR" => rating.red(),
        _ => rating.normal(),
    }
}
