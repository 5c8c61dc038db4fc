use clap::Parser;
use postq::application::{ListOptions, ListPostsService, ListTagsService, PostsByTagService};
use postq::cli::{format_post_list, format_tag_list, Cli, Commands};
use postq::error::PostqError;
use postq::infrastructure::ContentRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PostqError> {
    let repository = ContentRepository::open(cli.root)?;

    match cli.command {
        Commands::List {
            limit,
            drafts,
            long,
        } => {
            let service = ListPostsService::new(repository);
            let posts = service.execute(&ListOptions {
                limit,
                include_drafts: drafts,
            })?;
            println!("{}", format_post_list(&posts, long).trim_end());
            Ok(())
        }
        Commands::Tag {
            tag,
            limit,
            drafts,
            long,
        } => {
            let service = PostsByTagService::new(repository);
            let posts = service.execute(
                &tag,
                &ListOptions {
                    limit,
                    include_drafts: drafts,
                },
            )?;
            println!("{}", format_post_list(&posts, long).trim_end());
            Ok(())
        }
        Commands::Tags { drafts } => {
            let service = ListTagsService::new(repository);
            let tags = service.execute(&ListOptions {
                limit: None,
                include_drafts: drafts,
            })?;
            println!("{}", format_tag_list(&tags).trim_end());
            Ok(())
        }
    }
}
