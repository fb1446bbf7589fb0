// Integration tests for the calculator engine, driven token by token

use numcal::calculator::format;
use numcal::config::{DIGIT_BUDGET, EQUATION_PRECISION};
use numcal::{BinaryOp, Calculator, Sentinel, Token, UnaryOp};

fn digits(calc: &mut Calculator, text: &str) {
    for digit in text.chars() {
        calc.handle_token(Token::Digit(digit));
    }
}

fn op(calc: &mut Calculator, op: BinaryOp) {
    calc.handle_token(Token::BinaryOp(op));
}

fn digit_count(literal: &str) -> usize {
    literal.chars().filter(char::is_ascii_digit).count()
}

#[test]
fn test_initial_state() {
    let calc = Calculator::new();
    assert_eq!(calc.primary_text(), "0.");
    assert_eq!(calc.equation_text(), "");
}

#[test]
fn test_chained_operators_auto_evaluate() {
    let mut calc = Calculator::new();

    digits(&mut calc, "2");
    op(&mut calc, BinaryOp::Add);
    assert_eq!(calc.pending(), Some(BinaryOp::Add));

    digits(&mut calc, "3");
    op(&mut calc, BinaryOp::Add);
    assert_eq!(calc.partial().to_string(), "5");
    assert_eq!(calc.equation_text(), "2+3+");

    digits(&mut calc, "4");
    calc.handle_token(Token::Equals);
    assert_eq!(calc.primary_text(), "9.");
    assert_eq!(calc.equation_text(), "");
}

#[test]
fn test_no_precedence() {
    let mut calc = Calculator::new();
    digits(&mut calc, "2");
    op(&mut calc, BinaryOp::Add);
    digits(&mut calc, "3");
    op(&mut calc, BinaryOp::Multiply);
    digits(&mut calc, "4");
    calc.handle_token(Token::Equals);
    assert_eq!(calc.primary_text(), "20.");
}

#[test]
fn test_operator_replacement() {
    let mut calc = Calculator::new();
    digits(&mut calc, "5");
    op(&mut calc, BinaryOp::Add);
    op(&mut calc, BinaryOp::Multiply);

    assert_eq!(calc.equation_text(), "5×");
    assert_eq!(calc.pending(), Some(BinaryOp::Multiply));

    digits(&mut calc, "3");
    calc.handle_token(Token::Equals);
    assert_eq!(calc.primary_text(), "15.");
}

#[test]
fn test_backspace_after_result_clears() {
    let mut calc = Calculator::new();
    digits(&mut calc, "2");
    op(&mut calc, BinaryOp::Add);
    digits(&mut calc, "3");
    calc.handle_token(Token::Equals);
    assert_eq!(calc.primary_text(), "5.");

    calc.handle_token(Token::Backspace);
    assert_eq!(calc.primary(), "");
    assert_eq!(calc.primary_text(), "0.");
    assert!(calc.is_editing());
}

#[test]
fn test_overflow_freezes_until_next_digit() {
    let mut calc = Calculator::new();

    // the 21st nine is ignored by the digit budget
    digits(&mut calc, &"9".repeat(21));
    assert_eq!(calc.primary(), "9".repeat(20));

    op(&mut calc, BinaryOp::Add);
    digits(&mut calc, "1");
    calc.handle_token(Token::Equals);

    assert_eq!(calc.primary_text(), "OUT_OF_MEMORY");
    assert_eq!(calc.sentinel(), Some(Sentinel::Overflow));
    assert!(!calc.is_editing());

    digits(&mut calc, "4");
    assert_eq!(calc.primary_text(), "4.");
    assert!(calc.is_editing());
}

#[test]
fn test_overflow_beyond_decimal_range() {
    let mut calc = Calculator::new();
    digits(&mut calc, &"9".repeat(20));
    op(&mut calc, BinaryOp::Multiply);
    digits(&mut calc, &"9".repeat(20));
    calc.handle_token(Token::Equals);

    assert_eq!(calc.primary_text(), "OUT_OF_MEMORY");
}

#[test]
fn test_memory_round_trip() {
    let mut calc = Calculator::new();
    digits(&mut calc, "7");
    calc.handle_token(Token::MemoryAdd);
    calc.handle_token(Token::AllClear);
    calc.handle_token(Token::MemoryRecall);

    assert_eq!(calc.primary_text(), "7.");
}

#[test]
fn test_memory_records_displayed_value() {
    let mut calc = Calculator::new();
    digits(&mut calc, "2");
    calc.handle_token(Token::UnaryOp(UnaryOp::SquareRoot));
    calc.handle_token(Token::MemoryAdd);

    assert_eq!(calc.memory().to_string(), calc.primary_text().as_str());
}

#[test]
fn test_division_by_zero() {
    let mut calc = Calculator::new();
    digits(&mut calc, "1");
    op(&mut calc, BinaryOp::Divide);
    digits(&mut calc, "0");
    calc.handle_token(Token::Equals);

    assert_eq!(calc.primary_text(), "NOT_A_NUMBER");

    calc.handle_token(Token::AllClear);
    assert_eq!(calc.primary_text(), "0.");
}

#[test]
fn test_one_third_times_three() {
    let mut calc = Calculator::new();
    digits(&mut calc, "1");
    op(&mut calc, BinaryOp::Divide);
    digits(&mut calc, "3");
    op(&mut calc, BinaryOp::Multiply);
    digits(&mut calc, "3");
    calc.handle_token(Token::Equals);

    assert_eq!(calc.primary_text(), "1.");
}

#[test]
fn test_result_keeps_guard_digits() {
    let mut calc = Calculator::new();
    digits(&mut calc, "1");
    op(&mut calc, BinaryOp::Divide);
    digits(&mut calc, "3");
    calc.handle_token(Token::Equals);
    assert_eq!(calc.primary_text(), "0.3333333333333333333");

    op(&mut calc, BinaryOp::Multiply);
    assert_eq!(calc.equation_text(), "0.3333×");
    digits(&mut calc, "3");
    calc.handle_token(Token::Equals);
    assert_eq!(calc.primary_text(), "1.");

    // same through a unary result
    let mut calc = Calculator::new();
    digits(&mut calc, "3");
    calc.handle_token(Token::UnaryOp(UnaryOp::Reciprocal));
    op(&mut calc, BinaryOp::Multiply);
    digits(&mut calc, "3");
    calc.handle_token(Token::Equals);
    assert_eq!(calc.primary_text(), "1.");
}

#[test]
fn test_small_quotient_not_zeroed() {
    let mut calc = Calculator::new();
    digits(&mut calc, "1");
    op(&mut calc, BinaryOp::Divide);
    digits(&mut calc, "30000");
    calc.handle_token(Token::Equals);
    assert_eq!(calc.primary_text(), "0.0000333333333333333");

    op(&mut calc, BinaryOp::Multiply);
    digits(&mut calc, "30000");
    calc.handle_token(Token::Equals);
    assert_eq!(calc.primary_text(), "1.");

    let mut calc = Calculator::new();
    digits(&mut calc, "1");
    op(&mut calc, BinaryOp::Divide);
    digits(&mut calc, "70000");
    calc.handle_token(Token::Equals);
    assert_eq!(calc.primary_text(), "0.0000142857142857143");
}

#[test]
fn test_square_of_square_root() {
    let mut calc = Calculator::new();
    digits(&mut calc, "2");
    calc.handle_token(Token::UnaryOp(UnaryOp::SquareRoot));
    calc.handle_token(Token::UnaryOp(UnaryOp::Square));

    assert_eq!(calc.primary_text(), "2.");
}

#[test]
fn test_digit_budget_holds_for_reachable_states() {
    let mut calc = Calculator::new();
    let script = "98765432109876543210.5+/3=r^*7q%n=-.000001=PRB123456789012345678901234=";

    for key in script.chars() {
        calc.handle_key(key);

        // typed entry is bounded, results only on screen
        if calc.is_editing() {
            assert!(digit_count(calc.primary()) <= DIGIT_BUDGET as usize, "{}", calc.primary());
        }
        if calc.sentinel().is_none() {
            assert!(calc.primary().matches('.').count() <= 1);
        }
        assert!(digit_count(&calc.primary_text()) <= DIGIT_BUDGET as usize);
    }
}

#[test]
fn test_format_idempotence_on_results() {
    let mut calc = Calculator::new();
    digits(&mut calc, "22");
    op(&mut calc, BinaryOp::Divide);
    digits(&mut calc, "7");
    calc.handle_token(Token::Equals);

    for precision in [EQUATION_PRECISION, DIGIT_BUDGET] {
        let once = format(calc.primary(), precision);
        assert_eq!(format(&once, precision), once);
    }
}
