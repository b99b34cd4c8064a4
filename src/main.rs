use log::error;
use ngram_analyzer::{
    rank_documents, write_frequency_csv, RawDocument, DEFAULT_ANALYSIS_CONFIG,
};
use std::fs::File;
use std::io::{self, Read};
use std::process::exit;

fn print_usage() {
    println!(
        "Usage: ngram-analyzer-cli [-n SIZE] [-k COUNT] [--csv PATH] [FILE...]\n\
         \n\
         Computes the most frequent n-grams across the given plain-text files\n\
         and prints them as 'TOKENS: COUNT' lines. With no FILE arguments the\n\
         text is read from stdin.\n\
         \n\
         Options:\n\
           -n SIZE     n-gram size (default {})\n\
           -k COUNT    number of top results (default {})\n\
           --csv PATH  also export the table as CSV to PATH\n\
           -h, --help  show this message",
        DEFAULT_ANALYSIS_CONFIG.ngram_size, DEFAULT_ANALYSIS_CONFIG.top_k
    );
}

fn parse_flag_value(value: Option<String>, flag: &str) -> String {
    match value {
        Some(value) => value,
        None => {
            error!("Missing value for {}", flag);
            exit(1);
        }
    }
}

fn parse_number(value: &str, flag: &str) -> usize {
    match value.parse::<usize>() {
        Ok(number) => number,
        Err(e) => {
            error!("Invalid value '{}' for {}: {}", value, flag, e);
            exit(1);
        }
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let mut ngram_size = DEFAULT_ANALYSIS_CONFIG.ngram_size;
    let mut top_k = DEFAULT_ANALYSIS_CONFIG.top_k;
    let mut csv_path: Option<String> = None;
    let mut file_paths: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                let value = parse_flag_value(args.next(), "-n");
                ngram_size = parse_number(&value, "-n");
            }
            "-k" => {
                let value = parse_flag_value(args.next(), "-k");
                top_k = parse_number(&value, "-k");
            }
            "--csv" => {
                csv_path = Some(parse_flag_value(args.next(), "--csv"));
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => file_paths.push(arg),
        }
    }

    // Collect the corpus: one entry per file, or stdin as a single document
    let mut corpus: Vec<RawDocument> = Vec::new();
    if file_paths.is_empty() {
        let mut input = Vec::new();
        if let Err(e) = io::stdin().read_to_end(&mut input) {
            error!("Failed to read from stdin: {}", e);
            exit(1);
        }
        corpus.push(("<stdin>".to_string(), input));
    } else {
        for file_path in &file_paths {
            match std::fs::read(file_path) {
                Ok(bytes) => corpus.push((file_path.clone(), bytes)),
                Err(e) => {
                    error!("Failed to read {}: {}", file_path, e);
                    exit(1);
                }
            }
        }
    }

    let report = match rank_documents(&corpus, ngram_size, top_k) {
        Ok(report) => report,
        Err(e) => {
            error!("Error ranking n-grams: {}", e);
            exit(1);
        }
    };

    for skipped in &report.skipped_documents {
        eprintln!(
            "warning: skipped document {} ({}): {}",
            skipped.index, skipped.label, skipped.reason
        );
    }

    for (ngram, frequency) in &report.top_ngrams {
        println!("{}: {}", ngram.join(" "), frequency);
    }

    if let Some(csv_path) = csv_path {
        let file = match File::create(&csv_path) {
            Ok(file) => file,
            Err(e) => {
                error!("Failed to create {}: {}", csv_path, e);
                exit(1);
            }
        };
        if let Err(e) = write_frequency_csv(&report.top_ngrams, file) {
            error!("Failed to export {}: {}", csv_path, e);
            exit(1);
        }
    }
}
