use deoxyribose::genome::{quaternary_value, Chromosome, Codon, SearchOutcome};

fn codon(text: &str) -> Codon {
    Codon::parse(text).unwrap()
}

#[test]
fn test_single_occurrence_found_from_every_position() {
    // "tag" occurs exactly once, ending at 10.
    let chromosome = Chromosome::from_source("cccgggcctagccc").unwrap();
    let pattern = codon("tag");

    for start in 0..chromosome.len() {
        let ahead = chromosome.look_ahead(start, pattern);
        let back = chromosome.look_back(start, pattern);
        assert_eq!(ahead, SearchOutcome::Found(10), "look-ahead from {}", start);
        assert_eq!(back, SearchOutcome::Found(10), "look-back from {}", start);
    }
}

#[test]
fn test_single_occurrence_spanning_the_wrap_point() {
    // "atg" = last two symbols + first symbol.
    let chromosome = Chromosome::from_source("gcccccat").unwrap();
    for start in 0..chromosome.len() * 2 {
        assert_eq!(chromosome.look_ahead(start, Codon::START), SearchOutcome::Found(0));
        assert_eq!(chromosome.look_back(start, Codon::START), SearchOutcome::Found(0));
    }
}

#[test]
fn test_scan_order_picks_nearest_match() {
    let chromosome = Chromosome::from_source("ttagccttagcc").unwrap();
    let pattern = codon("tag");
    assert_eq!(chromosome.look_ahead(4, pattern), SearchOutcome::Found(9));
    assert_eq!(chromosome.look_back(4, pattern), SearchOutcome::Found(3));
}

#[test]
fn test_absent_pattern_reports_after_one_lap() {
    let chromosome = Chromosome::from_source("acacacac").unwrap();
    for start in 0..chromosome.len() {
        let outcome = chromosome.look_ahead(start, Codon::START);
        assert!(!outcome.is_found());
        assert_eq!(outcome.position(), start);
    }
}

#[test]
fn test_decoder_known_values() {
    assert_eq!(codon("aaa").quaternary(), 0);
    assert_eq!(codon("aac").quaternary(), 1);
    assert_eq!(codon("aga").quaternary(), 8);
    assert_eq!(codon("ttt").quaternary(), 63);
    assert_eq!(quaternary_value("TTT"), 63);
}

#[test]
fn test_decoder_is_a_bijection() {
    let mut seen = [false; 64];
    for c in Codon::all() {
        let value = c.quaternary() as usize;
        assert!(!seen[value], "{} decodes to a value already seen", c);
        seen[value] = true;
    }
    assert!(seen.iter().all(|s| *s));
}
