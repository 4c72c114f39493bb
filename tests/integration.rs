use bugurtc::config::Config;
use bugurtc::ir::Outcome;
use bugurtc::segment::segment;
use std::io::{self, BufRead, Cursor, Read};
use std::sync::atomic::{AtomicBool, Ordering};

const SAMPLE: &str = "\
@bugurt_thread
просыпаешься
@
идёшь на кухню
<BAGUETTE>
подпишись на канал https://t.me/spam @ да
<BAGUETTE>
#greentext some body text @ reply
<BAGUETTE>
just a line without anything
<BAGUETTE>
>be me
>open the fridge
>nothing
<BAGUETTE>
one @ two @ three
<BAGUETTE>
";

fn plain() -> Config {
    Config {
        context: String::new(),
        tsv: false,
        ..Config::default()
    }
}

fn run(input: &str, config: &Config) -> String {
    let running = AtomicBool::new(true);
    let mut out = Vec::new();
    segment(Cursor::new(input), &mut out, config, &running).unwrap();
    String::from_utf8(out).unwrap()
}

fn streams(output: &str, config: &Config) -> Vec<String> {
    output
        .lines()
        .map(|l| {
            l.strip_prefix(&format!("{} ", config.bos))
                .and_then(|l| l.strip_suffix(&format!(" {}", config.eos)))
                .unwrap()
                .to_string()
        })
        .collect()
}

#[test]
fn test_sample_corpus() {
    let out = run(SAMPLE, &plain());
    assert_eq!(
        out,
        "<BOS> ПРОСЫПАЕШЬСЯ <PAD> ИДЁШЬ НА КУХНЮ <EOS>\n\
         <BOS> #GREENTEXT <PAD> SOME BODY TEXT <PAD> REPLY <EOS>\n\
         <BOS> >BE ME >OPEN THE FRIDGE >NOTHING <EOS>\n\
         <BOS> ONE <PAD> TWO <PAD> THREE <EOS>\n"
    );
}

#[test]
fn test_tsv_output_with_context() {
    let out = run(SAMPLE, &Config::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "id\tbaguette");
    assert_eq!(lines.len(), 5);
    for (i, line) in lines[1..].iter().enumerate() {
        let expected = format!("{}\tНАПИШИ БАГЕТ <BOS> ", i + 1);
        assert!(line.starts_with(&expected), "{line}");
        assert!(line.ends_with(" <EOS>"), "{line}");
    }
}

#[test]
fn test_streams_are_single_clean_lines() {
    let config = plain();
    for stream in streams(&run(SAMPLE, &config), &config) {
        assert!(!stream.contains('\n'));
        assert!(!stream.starts_with("<PAD>"));
        assert!(!stream.ends_with("<PAD>"));
        assert!(!stream.contains("  "));
        assert!(!stream.contains("<PAD> <PAD>"));
    }
}

#[test]
fn test_limit_stops_after_n_records() {
    let config = Config {
        limit: 2,
        ..plain()
    };
    let out = run(SAMPLE, &config);
    assert_eq!(out.lines().count(), 2);

    let config = Config {
        limit: 0,
        ..plain()
    };
    assert_eq!(run(SAMPLE, &config).lines().count(), 4);
}

#[test]
fn test_limit_larger_than_input() {
    let config = Config {
        limit: 100,
        ..plain()
    };
    assert_eq!(run(SAMPLE, &config).lines().count(), 4);
}

/// Clears the running flag once `trigger` has been handed out by the reader,
/// i.e. while the post containing it is still being accumulated.
struct InterruptingReader<'a> {
    inner: Cursor<Vec<u8>>,
    trigger: &'a str,
    running: &'a AtomicBool,
}

impl Read for InterruptingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for InterruptingReader<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        let start = self.inner.position() as usize;
        let chunk = &self.inner.get_ref()[start..start + amt];
        if chunk.starts_with(self.trigger.as_bytes()) {
            self.running.store(false, Ordering::SeqCst);
        }
        self.inner.consume(amt);
    }
}

#[test]
fn test_cancellation_only_at_post_boundary() {
    let input = "a @ b\n<BAGUETTE>\nc @ d\nstill typing\n<BAGUETTE>\ne @ f\n<BAGUETTE>\n";
    let running = AtomicBool::new(true);
    let reader = InterruptingReader {
        inner: Cursor::new(input.as_bytes().to_vec()),
        trigger: "c @ d",
        running: &running,
    };
    let mut out = Vec::new();
    let stats = segment(reader, &mut out, &plain(), &running).unwrap();
    let out = String::from_utf8(out).unwrap();

    // The post in flight when the interrupt arrived is finished whole,
    // nothing after it is read.
    assert_eq!(
        out,
        "<BOS> A <PAD> B <EOS>\n<BOS> C <PAD> D STILL TYPING <EOS>\n"
    );
    assert!(stats.cancelled);
    assert_eq!(stats.posts, 2);
}

#[test]
fn test_cancellation_before_any_post() {
    let running = AtomicBool::new(false);
    let mut out = Vec::new();
    let stats = segment(Cursor::new("a @ b\nc @ d"), &mut out, &plain(), &running).unwrap();
    assert!(out.is_empty());
    assert_eq!(stats.posts, 0);
}

#[test]
fn test_every_accepted_post_has_structure() {
    let posts = [
        "a @ b",
        "#one #two body @ more",
        "x\n\n>y\n\nz",
        "@\nfirst\n@\nsecond\n@",
        "#tag only @ reply",
    ];
    let config = plain();
    for raw in posts {
        let stream = match bugurtc::clean_post(raw.as_bytes(), &config) {
            Outcome::Accepted(stream) => stream,
            Outcome::Rejected(reason) => panic!("{raw:?} rejected: {reason:?}"),
        };
        assert!(stream.contains(&config.pad), "{raw:?} -> {stream:?}");
        assert!(!stream.contains('\n'));
        assert!(!stream.starts_with(&config.pad));
        assert!(!stream.ends_with(&config.pad));
    }
}

#[test]
fn test_url_rejected_regardless_of_content() {
    let config = plain();
    let raw = "check this out http://spam.example @ lol\n@\nreal\n@\nbugurt\n";
    assert!(bugurtc::clean_post(raw.as_bytes(), &config)
        .accepted()
        .is_none());
}
