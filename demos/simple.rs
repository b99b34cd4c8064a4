use ngram_analyzer::rank_texts;

fn main() {
    env_logger::init();

    let text = "the cat sat on the mat. the cat ran.";

    let results = rank_texts(&[text], 2, 5).unwrap();

    println!("Top bigrams for the given text \"{}\"", text);
    for (ngram, frequency) in results {
        println!("{}: {}", ngram.join(" "), frequency);
    }
}
