//! Built-in C vocabulary offered as completions.

use crate::trie::Trie;

/// Headers, preprocessor directives, common libc functions, keywords and a
/// handful of snippets. Duplicates are harmless.
pub const C_VOCABULARY: &[&str] = &[
    // Headers
    "stdio.h", "stdlib.h", "string.h", "math.h", "time.h",
    "ctype.h", "stdbool.h", "limits.h", "float.h",
    // Preprocessor
    "#include", "#define", "#ifdef", "#ifndef", "#endif",
    "#pragma", "#if", "#else", "#elif",
    // Library functions
    "printf", "scanf", "fopen", "fclose", "malloc", "free",
    "calloc", "realloc", "exit", "atoi", "atof", "rand", "srand",
    "system", "abs", "strcpy", "strcat", "strcmp", "strlen",
    "memcpy", "memset", "sin", "cos", "tan", "sqrt", "pow", "log",
    "time", "clock", "sizeof", "main",
    // Keywords
    "auto", "break", "case", "char", "const", "continue", "default",
    "do", "double", "else", "enum", "extern", "float", "for", "goto",
    "if", "int", "long", "register", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "typedef", "union",
    "unsigned", "void", "volatile", "while",
    // Snippets
    "for(int i=0; i<n; i++)", "while(1)", "if()", "else if()",
    "switch()", "case", "break;", "continue;", "return 0;",
    "NULL", "FILE*", "size_t", "typedef struct", "void*", "int main()",
];

/// A trie holding [`C_VOCABULARY`] followed by `extra` tokens.
pub fn c_trie<I, T>(extra: I) -> Trie
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut trie = Trie::from_tokens(C_VOCABULARY);
    for token in extra {
        trie.insert(token);
    }
    trie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let trie = c_trie(std::iter::empty::<&str>());
        assert!(trie.len() < C_VOCABULARY.len());
        assert!(trie.contains(b"sizeof"));
        assert!(trie.contains(b"case"));
    }

    #[test]
    fn extra_tokens_are_added() {
        let trie = c_trie(["uint32_t", "printf"]);
        assert!(trie.contains(b"uint32_t"));
        assert!(trie.contains(b"printf"));
    }

    #[test]
    fn snippets_are_whole_tokens() {
        let trie = c_trie(std::iter::empty::<&str>());
        assert!(trie.contains(b"for(int i=0; i<n; i++)"));
        assert!(trie.contains(b"int main()"));
        assert!(!trie.contains(b"for(int"));
    }
}
