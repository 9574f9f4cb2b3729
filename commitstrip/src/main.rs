#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli_table::{print_stdout, WithTitle};
use colored::Colorize;
use commitstrip_core::{last_image_src, Error, GetPost, GetPosts, Request, Search};
use tracing::warn;

use crate::args::{Args, Download, Subcommands};
use crate::save::save_comic;
use crate::types::Comic;

mod args;
mod save;
mod types;

async fn download_comics(args: Download) -> Result<()> {
    let directory = args.directory.as_deref();

    // Single-post mode iff a slug or an id was given. The slug wins when
    // both are set; only one selector is ever sent to the API.
    let single = if let Some(slug) = args.slug {
        if args.id.is_some() {
            warn!("both --slug and --id were given, using the slug");
        }
        Some(GetPost::by_slug(slug))
    } else {
        args.id.map(GetPost::by_id)
    };

    if let Some(request) = single {
        let post = request.request().await?.post;
        let image = last_image_src(&post.content).ok_or(Error::MissingImage)?;
        save_comic(&image, &post.title, directory).await?;
        return Ok(());
    }

    let posts = GetPosts::new().set_count(args.number).request().await?.posts;

    // One full fetch+save cycle per post, strictly in sequence.
    for post in posts {
        let image = last_image_src(&post.content).ok_or(Error::MissingImage)?;
        save_comic(&image, &post.title, directory).await?;
    }

    Ok(())
}

fn found_line(count: usize) -> String {
    if count == 1 {
        String::from("Found 1 comic:")
    } else {
        format!("Found {count} comics:")
    }
}

async fn search_comics(query: String) -> Result<()> {
    let posts = Search::new(query).request().await?.posts;

    println!("{}", found_line(posts.len()).green());

    let comics = posts.into_iter().map(Comic::from).collect::<Vec<_>>();
    print_stdout(comics.with_title())?;

    Ok(())
}

/// Exit codes: 1 unexpected failure, 2 API refusal, 3 post without image,
/// 4 network or decoding failure, 5 filesystem failure.
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<Error>() {
        return match err {
            Error::Api { .. } => 2,
            Error::MissingImage => 3,
            Error::Reqwest(_) | Error::Json(_) | Error::UrlParse(_) => 4,
        };
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return 5;
    }
    1
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let outcome = match args.command {
        Subcommands::Download(download) => download_comics(download).await,
        Subcommands::Search(search) => search_comics(search.query).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(exit_code(&err))
        }
    }
}
