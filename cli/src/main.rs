#[macro_use] extern crate clap;

use clap::{App, ArgMatches};
use env_logger::{from_env, Env};
use imagename::{
    image::{NamePart, Tag},
    ImageName,
};
use serde::Serialize;
use std::{error::Error, process};

/// What `parse` and `fix` print with `--json`
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    image: &'a ImageName,
    canonical: String,
    valid: bool,
}

fn main() {
    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).get_matches();

    let log_level = matches.value_of("log_level").unwrap();
    from_env(Env::default().default_filter_or(log_level)).init();

    let result = match matches.subcommand() {
        ("parse", Some(sub)) => parse(sub),
        ("check", Some(sub)) => check(sub),
        ("fix", Some(sub)) => fix(sub),
        ("check-tags", Some(sub)) => check_tags(sub),
        _ => unreachable!("clap requires a subcommand"),
    };

    if let Err(err) = result {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn image_name(matches: &ArgMatches) -> Result<ImageName, Box<dyn Error>> {
    let raw = matches.value_of("image_name").unwrap();
    Ok(ImageName::parse(raw)?)
}

fn parse(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let image = image_name(matches)?;
    print_image(&image, matches.is_present("json"))
}

fn check(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let image = image_name(matches)?;
    image.validate()?;
    println!("ok");
    if let Some(registry) = image.registry() {
        println!("Using registry: {}", registry);
    }
    Ok(())
}

fn fix(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut image = image_name(matches)?;
    image.make_valid();
    if let Err(err) = image.validate() {
        log::warn!("repaired image name is still invalid, {}", err);
    }
    print_image(&image, matches.is_present("json"))
}

fn check_tags(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let tags = Tag::parse_list(matches.value_of("tags").unwrap_or_default())?;
    log::debug!("checked tags {:?}", tags);
    println!("ok");
    Ok(())
}

fn print_image(image: &ImageName, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let report = Report {
            image,
            canonical: image.to_string(),
            valid: image.is_valid(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("registry:   {}", part_or_dash(image.registry()));
    println!("namespace:  {}", part_or_dash(image.namespace()));
    println!("repository: {}", part_or_dash(image.repository()));
    println!("tag:        {}", part_or_dash(image.tag()));
    println!("canonical:  {}", image);
    println!("valid:      {}", image.is_valid());
    Ok(())
}

fn part_or_dash<P: NamePart>(part: Option<&P>) -> &str {
    part.map_or("-", NamePart::as_str)
}
