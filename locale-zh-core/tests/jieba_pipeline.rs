use locale_zh_core::host::{Host, LegacyHost, ModernHost};
use locale_zh_core::{ChineseLocale, HostMode, Token};

const SAMPLE: &str = "我来到北京清华大学，参观了中文搜索引擎的实验室";

fn modern() -> ModernHost {
    let mut host = ModernHost::new("2.3.9");
    ChineseLocale::new().install(Some(&mut host)).unwrap();
    host
}

#[test]
fn segments_into_words() {
    let tokens = ChineseLocale::new()
        .tokenizer(HostMode::Modern)
        .tokenize(Some(SAMPLE.into()));
    let texts: Vec<&str> = tokens.iter().map(Token::as_str).collect();

    assert!(texts.contains(&"北京"), "{texts:?}");
    assert!(texts.contains(&"清华"), "{texts:?}");
    assert!(texts.contains(&"清华大学"), "{texts:?}");
}

#[test]
fn tokens_are_lowercase_substrings() {
    let input = "Rust 语言的 Search Engine";
    let lower = input.to_lowercase();
    let host = modern();

    let tokens = host.analyze(Some(input.into()));
    assert!(!tokens.is_empty());
    for token in &tokens {
        assert!(!token.is_empty());
        assert!(!token.as_str().contains(' '));
        assert_eq!(token.as_str(), token.as_str().to_lowercase());
        assert!(lower.contains(token.as_str()), "{token} not in input");
    }
}

#[test]
fn positions_point_at_the_token() {
    let chars: Vec<char> = SAMPLE.chars().collect();
    let tokens = ChineseLocale::new()
        .tokenizer(HostMode::Modern)
        .tokenize(Some(SAMPLE.into()));

    for (i, token) in tokens.iter().enumerate() {
        let meta = token.metadata().unwrap();
        assert_eq!(meta.index as usize, i);

        let pos = meta.position.unwrap();
        let slice: String = chars[pos.start as usize..pos.end() as usize].iter().collect();
        assert_eq!(slice, token.as_str());
    }
}

#[test]
fn stop_words_and_punctuation_are_gone() {
    let texts: Vec<String> = modern()
        .analyze(Some(SAMPLE.into()))
        .into_iter()
        .map(Token::into_string)
        .collect();

    assert!(!texts.iter().any(|t| t == "的" || t == "了" || t == "我"));
    assert!(!texts.iter().any(|t| t == "，"));
    assert!(texts.iter().any(|t| t == "搜索"));
}

#[test]
fn legacy_host_shape() {
    let mut host = LegacyHost::new("0.7.2");
    ChineseLocale::new().install(Some(&mut host)).unwrap();

    let tokens = host.analyze(Some(SAMPLE.into()));
    assert!(!tokens.is_empty());
    assert!(tokens.iter().all(|t| t.metadata().is_none()));
}
