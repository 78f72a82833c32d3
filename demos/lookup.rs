/// Dictionary lookup demo
///
/// Builds a tiny corpus and runs each kind of lookup:
/// - exact word, gloss, affix and grammar class matches
/// - compound explanation and near-miss suggestions
/// - prefix completion
///
/// Run with `RUST_LOG=debug cargo run --example lookup` to see build logs.

use vlasisku::core::config::Config;
use vlasisku::core::dictionary::Dictionary;
use vlasisku::core::types::{Corpus, CorpusTables, RawEntry, RawGloss};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let tables = CorpusTables::from_json(
        r#"{"class_scales": {"LE": 1.4}, "cll": {"LE": [[6, 1]]}, "terminators": {"LE": "KU"}}"#,
    )?;

    let corpus = Corpus {
        entries: vec![
            RawEntry::new("klama", "gismu")
                .with_field("rafsi", "kla")
                .with_field("definition", "$x_1$ comes/goes to destination $x_2$"),
            RawEntry::new("gerku", "gismu")
                .with_field("rafsi", "ger")
                .with_field("definition", "$x_1$ is a dog of breed $x_2$"),
            RawEntry::new("zdani", "gismu")
                .with_field("rafsi", "zda")
                .with_field("definition", "$x_1$ is a nest/house/lair of $x_2$"),
            RawEntry::new("lo", "cmavo")
                .with_field("selmaho", "LE")
                .with_field("definition", "generic article")
                .with_field("notes", "Terminated by {ku}."),
            RawEntry::new("ku", "cmavo").with_field("selmaho", "KU"),
        ],
        glosses: vec![RawGloss::new("go", "klama"), RawGloss::new("dog", "gerku")],
        tables,
    };

    let dictionary = Dictionary::open(corpus, Config::default())?;
    let snapshot = dictionary.snapshot();
    println!("Loaded {} entries (etag {})\n", snapshot.len(), snapshot.etag());

    for query in ["klama", "dogs", "kla", "LE", "gerzda", "klema"] {
        let result = dictionary.search(query);

        if let Some(target) = result.redirect() {
            println!("'{}' -> redirect to {}", query, snapshot.entry(target).word);
            continue;
        }

        let words: Vec<&str> = result.entries().map(|id| snapshot.entry(id).word.as_str()).collect();
        println!("'{}': {:?}", query, words);

        if let Some(suggestions) = result.suggestions {
            for m in &suggestions.morpheme_matches {
                println!("  {} from {}", m.morpheme, snapshot.entry(m.entry).word);
            }
            if suggestions.unknown_affixes {
                println!("  contains unknown affixes");
            }
            if !suggestions.near_misses.is_empty() {
                println!("  did you mean {:?}?", suggestions.near_misses);
            }
        }
    }

    println!("\nCompletions for 'g':");
    for completion in dictionary.complete("g") {
        println!("  {} ({:?})", completion.text, completion.kind);
    }

    println!("\nGrammar classes:");
    for (class, scale) in snapshot.grammar_classes() {
        println!("  {} (scale {})", class, scale.unwrap_or(1.0));
    }

    if let Some(entry) = snapshot.get("gerku") {
        let glosses: Vec<&str> = snapshot.glosses_of(entry.id).map(|g| g.text.as_str()).collect();
        println!("\n{} ({}) glosses: {:?}", entry.word, entry.entry_type.description(), glosses);
    }

    if let Some(entry) = snapshot.get("lo") {
        println!("\n{}", serde_json::to_string_pretty(&entry.summary())?);
    }

    Ok(())
}
