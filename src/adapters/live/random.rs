//! Random colors and lorem-ipsum words from the thread-local RNG.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ports::random_source::{ColorSource, WordSource};

/// Classic lorem-ipsum vocabulary.
const LOREM_WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium",
    "doloremque", "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis",
    "et", "quasi", "architecto", "beatae", "vitae", "dicta", "sunt", "explicabo", "aspernatur",
    "aut", "odit", "aut", "fugit", "sed", "quia", "consequuntur", "magni", "dolores", "eos",
    "qui", "ratione", "voluptatem", "sequi", "nesciunt", "neque", "dolorem", "ipsum", "quia",
    "dolor", "sit", "amet", "consectetur", "adipisci", "velit", "sed", "quia", "non", "numquam",
    "eius", "modi", "tempora", "incidunt", "ut", "labore", "et", "dolore", "magnam", "aliquam",
    "quaerat", "voluptatem", "ut", "enim", "ad", "minima", "veniam", "quis", "nostrum",
    "exercitationem", "ullam", "corporis", "nemo", "enim", "ipsam", "voluptatem", "quia",
    "voluptas", "sit", "suscipit", "laboriosam", "nisi", "ut", "aliquid", "ex", "ea", "commodi",
    "consequatur", "quis", "autem", "vel", "eum", "iure", "reprehenderit", "qui", "in", "ea",
    "voluptate", "velit", "esse", "quam", "nihil", "molestiae", "et", "iusto", "odio",
    "dignissimos", "ducimus", "qui", "blanditiis", "praesentium", "laudantium", "totam", "rem",
    "voluptatum", "deleniti", "atque", "corrupti", "quos", "dolores", "et", "quas", "molestias",
    "excepturi", "sint", "occaecati", "cupiditate", "non", "provident", "sed", "ut",
    "perspiciatis", "unde", "omnis", "iste", "natus", "error", "similique", "sunt", "in",
    "culpa", "qui", "officia", "deserunt", "mollitia", "animi", "id", "est", "laborum", "et",
    "dolorum", "fuga", "et", "harum", "quidem", "rerum", "facilis", "est", "et", "expedita",
    "distinctio", "nam", "libero", "tempore", "cum", "soluta", "nobis", "est", "eligendi",
    "optio", "cumque", "nihil", "impedit", "quo", "porro", "quisquam", "est", "qui", "minus",
    "id", "quod", "maxime", "placeat", "facere", "possimus", "omnis", "voluptas", "assumenda",
    "est", "omnis", "dolor", "repellendus", "temporibus", "autem", "quibusdam", "et", "aut",
    "consequatur", "vel", "illum", "qui", "dolorem", "eum", "fugiat", "quo", "voluptas",
    "nulla", "pariatur", "at", "vero", "eos", "et", "accusamus", "officiis", "debitis", "aut",
    "rerum", "necessitatibus", "saepe", "eveniet", "ut", "et", "voluptates", "repudiandae",
    "sint", "et", "molestiae", "non", "recusandae", "itaque", "earum", "rerum", "hic", "tenetur",
    "a", "sapiente", "delectus", "ut", "aut", "reiciendis", "voluptatibus", "maiores", "doloribus",
    "asperiores", "repellat",
];

/// Uniformly random 24-bit colors.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomColor;

impl ColorSource for RandomColor {
    fn hex_color(&self) -> String {
        let value: u32 = rand::thread_rng().gen_range(0..=0x00FF_FFFF);
        format!("{value:06X}")
    }
}

/// Random words from the lorem-ipsum vocabulary.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoremWords;

impl WordSource for LoremWords {
    fn word(&self) -> String {
        LOREM_WORDS.choose(&mut rand::thread_rng()).copied().unwrap_or("lorem").to_string()
    }
}
