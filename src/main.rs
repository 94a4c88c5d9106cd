use log::{info, LevelFilter};
use ordered_trees::avl_tree::AvlTree;
use ordered_trees::bst::BoundedTree;
use ordered_trees::map::KeyedMap;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    let logger = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    if let Err(err) = logger {
        eprintln!("unable to install logger: {}", err);
    }

    let mut avl = AvlTree::new();
    let mut bst = BoundedTree::new();
    for i in 0..15 {
        avl.insert(i);
        bst.insert(i);
    }
    info!("avl height {}, bst height {}", avl.height(), bst.height());
    info!("avl pre-order {:?}", avl.pre_order());

    avl.remove(&7);
    info!("avl after removing 7: {:?}, balanced: {}", avl.pre_order(), avl.is_balanced());

    let mut words: KeyedMap<&str, u32> = KeyedMap::new();
    for word in "the quick brown fox jumps over the lazy dog".split_whitespace() {
        *words.at_mut(word) += 1;
    }
    info!("word counts {:?}", words);
    match words.at(&"cat") {
        Ok(count) => info!("cat appears {} times", count),
        Err(err) => info!("cat: {}", err),
    }
}
