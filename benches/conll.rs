use compsrl::conll::format_parse;
use compsrl::{Config, ParseReader, ReadMode, SrlSentence};
use divan::{Bencher, black_box};

fn main() {
    divan::main();
}

const SENTENCE: &str = "\
1\tThe\tthe\t_\tDT\t_\t_\t_\t2\t_\tdet\t_\t_\t_\t_
2\tCanon\tCanon\t_\tNNP\t_\t_\t_\t4\t_\tnsubj\t_\t_\t_\tA1
3\tclearly\tclearly\t_\tRB\t_\t_\t_\t4\t_\tadvmod\t_\t_\t_\t_
4\thas\thave\t_\tVBZ\t_\t_\t_\t0\t_\troot\t_\t_\t_\t_
5\ta\ta\t_\tDT\t_\t_\t_\t7\t_\tdet\t_\t_\t_\t_
6\tbetter\tgood\t_\tJJR\t_\t_\t_\t7\t_\tamod\t_\tY\tcomparative.01\t_
7\tsensor\tsensor\t_\tNN\t_\t_\t_\t4\t_\tdobj\t_\t_\t_\tA0
8\tthan\tthan\t_\tIN\t_\t_\t_\t6\t_\tprep\t_\t_\t_\t_
9\tthe\tthe\t_\tDT\t_\t_\t_\t10\t_\tdet\t_\t_\t_\t_
10\tNikon\tNikon\t_\tNNP\t_\t_\t_\t8\t_\tpobj\t_\t_\t_\tA2
11\t.\t.\t_\t.\t_\t_\t_\t4\t_\tpunct\t_\t_\t_\t_

";

fn corpus_text(sentences: usize) -> String {
    SENTENCE.repeat(sentences)
}

fn read_all(text: &str, mode: ReadMode) -> Vec<SrlSentence> {
    let config = Config::default().with_read_mode(mode);
    ParseReader::from_string(text, &config)
        .filter_map(Result::ok)
        .collect()
}

/// Read 1000 sentences in each read mode
#[divan::bench(args = [ReadMode::OnlyDeps, ReadMode::OnlyPredicates, ReadMode::Full])]
fn read_sentences(bencher: Bencher, mode: ReadMode) {
    let text = corpus_text(1000);
    bencher.bench_local(|| black_box(read_all(black_box(&text), mode)));
}

/// Write 1000 sentences with SRL columns
#[divan::bench]
fn write_sentences(bencher: Bencher) {
    let sentences = read_all(&corpus_text(1000), ReadMode::Full);
    let grouping = Config::default().grouping;
    bencher.bench_local(|| {
        for sentence in &sentences {
            black_box(format_parse(black_box(sentence), grouping));
        }
    });
}

/// Lowest common ancestor of every word pair
#[divan::bench]
fn all_pairs_lca(bencher: Bencher) {
    let sentences = read_all(SENTENCE, ReadMode::Full);
    let sentence = &sentences[0];
    bencher.bench_local(|| {
        for a in 1..=sentence.len() {
            for b in 1..=sentence.len() {
                black_box(sentence.lowest_common_ancestor(a, b));
            }
        }
    });
}
