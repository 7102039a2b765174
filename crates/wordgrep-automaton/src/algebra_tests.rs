use crate::test_utils::{accepted, assert_same_language, regex};
use crate::Automaton;

#[test]
fn concat_with_empty_is_identity() {
    let a = regex("a(b|c)*");

    assert_same_language(&a.concat(&Automaton::empty()), &a);
    assert_same_language(&Automaton::empty().concat(&a), &a);
}

#[test]
fn concat_with_nothing_is_nothing() {
    let a = regex("ab");

    assert_eq!(a.concat(&Automaton::nothing()), Automaton::nothing());
    assert_eq!(Automaton::nothing().concat(&a), Automaton::nothing());
}

#[test]
fn alternation_is_idempotent() {
    let a = regex("ab*");

    assert_same_language(&a.alternation(&a), &a);
}

#[test]
fn alternation_is_commutative() {
    let a = regex("ab");
    let b = regex("c*");

    assert_same_language(&a.alternation(&b), &b.alternation(&a));
}

#[test]
fn alternation_of_many() {
    let options = [regex("a"), regex("bb"), regex("cab")];

    let a = Automaton::alternation_of(&options);

    assert_eq!(accepted(&a), vec!["A", "BB", "CAB"]);
}

#[test]
fn alternation_of_nothing_is_nothing() {
    let none: [Automaton; 0] = [];

    let a = Automaton::alternation_of(&none);

    assert_eq!(a, Automaton::nothing());
}

#[test]
fn star_accepts_empty_word() {
    for source in ["a", "abc", "(a|b)c"] {
        assert!(regex(source).kleene_star().accepts(""), "{source}");
    }
    assert!(Automaton::nothing().kleene_star().accepts(""));
}

#[test]
fn star_of_star_is_star() {
    let a = regex("ab");

    assert_same_language(&a.kleene_star().kleene_star(), &a.kleene_star());
}

#[test]
fn one_or_more_needs_one_copy() {
    let a = regex("ab").one_or_more();

    assert_eq!(accepted(&a), vec!["AB", "ABAB"]);
}

#[test]
fn zero_or_one_adds_empty_word() {
    let a = regex("ab").zero_or_one();

    assert_eq!(accepted(&a), vec!["", "AB"]);
}

#[test]
fn cartesian_product_shuffles() {
    let a = regex("a").cartesian_product(&regex("bc"));

    assert_eq!(accepted(&a), vec!["ABC", "BAC", "BCA"]);
}

#[test]
fn cartesian_product_is_commutative_in_language() {
    let a = regex("ab*");
    let b = regex("c|ba");

    assert_same_language(&a.cartesian_product(&b), &b.cartesian_product(&a));
}

#[test]
fn cartesian_product_with_empty_is_identity() {
    let a = regex("a(b|c)");

    assert_same_language(&a.cartesian_product(&Automaton::empty()), &a);
}

#[test]
fn tensor_product_intersects() {
    let a = regex("a.*").tensor_product(&regex(".*c"));

    assert_eq!(
        accepted(&a),
        vec![
            "AC", "AAC", "ABC", "ACC", "AAAC", "AABC", "AACC", "ABAC", "ABBC", "ABCC", "ACAC",
            "ACBC", "ACCC",
        ]
    );
}

#[test]
fn tensor_product_with_self_is_self() {
    let a = regex("(ab|c)*");

    assert_same_language(&a.tensor_product(&a), &a);
}

#[test]
fn tensor_product_keeps_unit_weights() {
    let a = regex("a*b").tensor_product(&regex(".*"));

    for node in a.nodes() {
        assert!(node.letter_edges().all(|(_, e)| e.weight.is_one()));
    }
}

#[test]
fn operands_are_untouched() {
    let a = regex("ab");
    let b = regex("c?");
    let (a_before, b_before) = (a.clone(), b.clone());

    let _ = a.concat(&b);
    let _ = a.alternation(&b);
    let _ = a.kleene_star();
    let _ = a.cartesian_product(&b);
    let _ = a.tensor_product(&b);

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
