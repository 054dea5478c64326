use tf_idf_stats::{select, Analyzer, Tokenizer, VocabularySource};

fn main() {
    // build corpus
    let corpus = [
        "Rust is fast, and memory safe.",
        "Rust has a borrow checker; the borrow checker is strict.",
        "Python is easy to learn.",
        "The compiler checks memory safety at compile time.",
    ];

    // analyzer with stop words
    let analyzer = Analyzer::new().with_tokenizer(
        Tokenizer::builder()
            .stop_words(["is", "a", "the", "and", "to", "at", "has"])
            .build(),
    );

    let scores = analyzer.tf_idf(&corpus).expect("default stages do not fail");
    for (doc, doc_scores) in corpus.iter().zip(&scores) {
        println!("{doc}");
        for (term, score) in doc_scores {
            println!("    {term:<10} {score:.4}");
        }
    }

    println!("top term per document: {:?}", select::top_n_terms(1, &scores));
    println!("top terms by sum: {:?}", select::top_sum_terms(&scores));
    println!("top terms by max: {:?}", select::top_max_terms(&scores));

    // terms found in more than one document
    let shared = analyzer
        .vocabulary(VocabularySource::Documents(&corpus), Some(1.0))
        .expect("default stages do not fail");
    println!("shared vocabulary: {:?}", shared);

    // score a query against the corpus model
    let idf = analyzer.idf(&corpus).expect("default stages do not fail");
    let query = analyzer
        .tf_idf_document(&idf, "memory safe rust")
        .expect("default stages do not fail");
    println!("query scores: {:?}", query);
}
