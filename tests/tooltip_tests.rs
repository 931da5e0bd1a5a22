// Host-side tests for tooltip text assembly.

mod common;

use common::lecture;
use landscape_core::tooltip::{published_date, truncate_description};
use landscape_core::{LandscapeError, LanguageTable, TooltipFormatter};

fn formatter() -> TooltipFormatter {
    TooltipFormatter::new(LanguageTable::from_pairs([("en", "English"), ("sl", "Slovene")]))
}

#[test]
fn full_record_renders_every_section() {
    let mut p = lecture("kdd2012_keynote", 0.5, 0.5);
    p.author = Some(vec!["Ada Lovelace".into(), "Charles Babbage".into()]);
    p.description = Some("Short talk.".into());
    p.views = 1234.0;
    let text = formatter().create_text(&p).unwrap();

    assert!(text.starts_with("<b>Lecture title:</b> Lecture kdd2012_keynote<br>"));
    assert!(text.contains("<b>Presenter:</b> Ada Lovelace, Charles Babbage<br>"));
    assert!(text.contains("<b>Organization:</b> Analytical Society<br><br>"));
    assert!(text.contains("<b>Description: </b>Short talk.<br><br>"));
    assert!(text.contains("The lecture is in English. "));
    assert!(text.contains("It was published in 31.05.2012 and it's duration is 01:01:01. "));
    assert!(text.ends_with("There have been <b>1234</b> views until 24.07.2016. "));
}

#[test]
fn missing_author_and_organization_become_not_found() {
    let mut p = lecture("a", 0.0, 0.0);
    p.author = None;
    p.organization = None;
    let text = formatter().create_text(&p).unwrap();
    assert!(text.contains("<b>Presenter:</b> not-found<br>"));
    assert!(text.contains("<b>Organization:</b> not-found<br><br>"));
}

#[test]
fn description_section_is_skipped_when_absent() {
    let p = lecture("a", 0.0, 0.0);
    let text = formatter().create_text(&p).unwrap();
    assert!(!text.contains("Description"));
}

#[test]
fn short_description_passes_through() {
    let desc = "A survey of methods. ".repeat(10);
    assert!(desc.chars().count() < 300);
    assert_eq!(truncate_description(&desc), desc.as_str());
}

#[test]
fn long_description_is_cut_at_first_dot_after_offset() {
    let head = "x".repeat(310);
    let desc = format!("{}. More text follows. And more.", head);
    let cut = truncate_description(&desc);
    assert_eq!(cut, format!("{}....", head));
}

#[test]
fn dots_before_the_offset_do_not_cut() {
    let desc = format!("Intro. {}", "y".repeat(400));
    assert_eq!(truncate_description(&desc), desc.as_str());
}

#[test]
fn categories_skip_the_first_entry() {
    let mut p = lecture("a", 0.0, 0.0);
    p.categories = Some(vec![
        "Computer Science".into(),
        "Machine Learning".into(),
        "Statistics".into(),
    ]);
    let text = formatter().create_text(&p).unwrap();
    assert!(text.contains(
        "The main categories of the lecture were <b>Machine Learning, Statistics</b>. "
    ));
}

#[test]
fn category_grammar_counts_the_unsliced_list() {
    let mut p = lecture("a", 0.0, 0.0);
    p.categories = Some(vec!["Computer Science".into()]);
    let text = formatter().create_text(&p).unwrap();
    assert!(text.contains("The main category of the lecture was <b></b>. "));

    p.categories = Some(vec!["Computer Science".into(), "Biology".into()]);
    let text = formatter().create_text(&p).unwrap();
    assert!(text.contains("The main categories of the lecture were <b>Biology</b>. "));
}

#[test]
fn unmapped_language_is_reported() {
    let mut p = lecture("a", 0.0, 0.0);
    p.language = "xx".into();
    let err = formatter().create_text(&p).unwrap_err();
    assert!(matches!(err, LandscapeError::UnknownLanguage(code) if code == "xx"));
}

#[test]
fn published_date_is_reordered() {
    assert_eq!(published_date("2016-07-24T08:30:00Z"), "24.07.2016");
    assert_eq!(published_date("2009-01-02"), "02.01.2009");
}

#[test]
fn database_date_is_configurable() {
    let p = lecture("a", 0.0, 0.0);
    let text = formatter()
        .with_database_date("01.01.2020")
        .create_text(&p)
        .unwrap();
    assert!(text.ends_with("views until 01.01.2020. "));
}
