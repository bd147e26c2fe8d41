use std::{cell::RefCell, fs, io, rc::Rc};

use rill::{
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{evaluator::core::Context, value::core::Value},
    run_with_context,
};
use walkdir::WalkDir;

/// An output sink the test keeps a handle to after the context took it.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn run_capturing(src: &str) -> (Result<Option<Value>, Error>, String) {
    let buffer = SharedBuffer::default();
    let mut context = Context::with_output(buffer.clone()).with_seed(42);

    let result = run_with_context(&mut context, src);
    let output = String::from_utf8(buffer.0.borrow().clone()).expect("output is UTF-8");

    (result, output)
}

fn assert_success(src: &str) -> Option<Value> {
    match run_capturing(src) {
        (Ok(value), _) => value,
        (Err(e), _) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_output(src: &str, expected: &str) {
    match run_capturing(src) {
        (Ok(_), output) => assert_eq!(output, expected, "unexpected output for:\n{src}"),
        (Err(e), _) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run_capturing(src) {
        (Ok(_), _) => panic!("Script succeeded but was expected to fail:\n{src}"),
        (Err(e), _) => e,
    }
}

#[test]
fn precedence_is_stable_across_runs() {
    for _ in 0..3 {
        assert_output("x = 2 + 3 * 4\nprintln(x)", "14.0\n");
    }
    assert_output("x = (2 + 3) * 4\nprintln(x)", "20.0\n");
    assert_output("x = 10 - 4 - 3\nprintln(x)", "3.0\n");
    assert_output("x = -2 * 3\nprintln(x)", "-6.0\n");
}

#[test]
fn last_value_is_returned() {
    assert_eq!(assert_success("x = 1\ny = x + 1"), Some(Value::Number(2.0)));
    assert_eq!(assert_success("println(1)"), None);
}

#[test]
fn compound_assignment() {
    assert_output("x = 10\nx += 5\nx *= 2\nprintln(x)", "30.0\n");
    assert_output("x = 9\nx -= 1\nx /= 4\nprintln(x)", "2.0\n");
    assert_output("x = 5\nx++\nx--\nx--\nprintln(x)", "4.0\n");
    assert_output("s = \"ab\"\ns += \"cd\"\nprintln(s)", "abcd\n");
}

#[test]
fn compound_assignment_reads_target_before_right_side() {
    assert_output("a = [[1], [2]]\na += [a.pop()]\nprintln(a)", "[[1.0], [2.0], [2.0]]\n");
}

#[test]
fn undeclared_variable_is_rejected_before_running() {
    let err = assert_failure("println(x)\nx = 5");
    assert!(matches!(err, Error::Parse(ParseError::UndeclaredVariable { ref name, line: 1 }) if name == "x"));

    let err = assert_failure("x = x + 1");
    assert!(matches!(err, Error::Parse(ParseError::UndeclaredVariable { .. })));

    assert_output("x = 5\nprintln(x)", "5.0\n");
}

#[test]
fn parameters_shadow_globals_without_changing_them() {
    let src = "x = 1
function change(x) then
    x = 99
end
change(5)
println(x)";
    assert_output(src, "1.0\n");
}

#[test]
fn functions_return_values() {
    let src = "function area(w, h) then
    return w * h
end
println(area(3, 4))";
    assert_output(src, "12.0\n");
}

#[test]
fn recursion_uses_a_frame_per_call() {
    let src = "function fact(n) then
    result = 1
    if n > 1 then
        result = n * fact(n - 1)
    end
    return result
end
println(fact(5))";
    assert_output(src, "120.0\n");
}

#[test]
fn functions_do_not_see_globals() {
    let src = "x = 1
function peek() then
    y = x
end
peek()";
    let err = assert_failure(src);
    assert!(matches!(err, Error::Runtime(RuntimeError::UnknownVariable { ref name, line: 3 }) if name == "x"));
}

#[test]
fn function_without_return_has_no_value() {
    let err = assert_failure("function nothing() then\nend\nx = nothing()");
    assert!(matches!(err, Error::Runtime(RuntimeError::MissingValue { line: 3 })));
}

#[test]
fn repeat_counts() {
    assert_output("count = 0\nrepeat 0 then\n    count += 1\nend\nprintln(count)", "0.0\n");
    assert_output("count = 0\nrepeat -3 then\n    count += 1\nend\nprintln(count)", "0.0\n");
    assert_output("count = 0\nrepeat 2.9 then\n    count += 1\nend\nprintln(count)", "2.0\n");
}

#[test]
fn while_loops_check_before_each_iteration() {
    assert_output("i = 0\nwhile i < 3 then\n    i++\nend\nprintln(i)", "3.0\n");
    assert_output("i = 5\nwhile i < 3 then\n    i++\nend\nprintln(i)", "5.0\n");
}

#[test]
fn each_binds_elements_in_order_and_unbinds_afterwards() {
    let buffer = SharedBuffer::default();
    let mut context = Context::with_output(buffer.clone());

    run_with_context(&mut context, "each i in [1, 2, 3] then\n    println(i)\nend").unwrap();

    assert_eq!(String::from_utf8(buffer.0.borrow().clone()).unwrap(), "1.0\n2.0\n3.0\n");
    assert_eq!(context.get_variable("i"), None);
}

#[test]
fn each_over_empty_array_and_strings() {
    assert_output("each i in [] then\n    println(i)\nend\nprintln(\"done\")", "done\n");
    assert_output("each c in \"abc\" then\n    println(c)\nend", "a\nb\nc\n");

    let err = assert_failure("each i in 5 then\nend");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn loop_variable_is_removed_even_if_previously_assigned() {
    let err = assert_failure("i = 10\neach i in [1] then\nend\nprintln(i)");
    assert!(matches!(err, Error::Runtime(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn conditional_chains() {
    let src = |x: i32| {
        format!("x = {x}
if x < 5 then
    println(\"small\")
end elseif x < 10 then
    println(\"medium\")
end
else then
    println(\"large\")
end")
    };

    assert_output(&src(1), "small\n");
    assert_output(&src(7), "medium\n");
    assert_output(&src(12), "large\n");
}

#[test]
fn equality_is_structural() {
    let src = "a = [1, \"x\"]
b = [1, \"x\"]
if a == b then
    println(\"same\")
end
if a != 1 then
    println(\"different\")
end";
    assert_output(src, "same\ndifferent\n");
}

#[test]
fn ordering_across_types_is_an_error() {
    let err = assert_failure("x = \"a\"\nif x < 1 then\nend");
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::UnorderedComparison { left: "string",
                                                                        right: "number",
                                                                        line: 2 })));

    assert_output("if \"apple\" < \"banana\" then\n    println(\"yes\")\nend", "yes\n");
    assert_output("if [1, 2] < [1, 3] then\n    println(\"yes\")\nend", "yes\n");
}

#[test]
fn division_by_zero_is_error() {
    let err = assert_failure("x = 5 / 0");
    assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
    assert_eq!(err.to_string(), "Runtime error. Error on line 1: Division by zero.");
}

#[test]
fn mixed_arithmetic_is_a_type_error() {
    let err = assert_failure("x = \"a\" - 1");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeError { .. })));

    let err = assert_failure("x = -\"a\"");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn string_and_array_operators() {
    assert_output("s = \"hello\" + \" \" + \"world\"\nprintln(s)", "hello world\n");
    assert_output("s = \"ab\" * 3\nprintln(s)", "ababab\n");
    assert_output("a = [1] + [2, 3]\nprintln(a)", "[1.0, 2.0, 3.0]\n");
    assert_output("a = 2 * [0]\nprintln(a)", "[0.0, 0.0]\n");
    assert_output("a = [\"a\", [1]]\nprintln(a)", "[\"a\", [1.0]]\n");
}

#[test]
fn oversized_repetition_is_rejected() {
    let err = assert_failure("s = \"ab\" * 9000000000000000000");
    assert!(matches!(err, Error::Runtime(RuntimeError::InvalidArgument { line: 1, .. })));

    let err = assert_failure("a = [0] * 1000000000000");
    assert!(matches!(err, Error::Runtime(RuntimeError::InvalidArgument { line: 1, .. })));

    assert_output("a = [] * 9000000000000000000\nprintln(len(a))", "0.0\n");
    assert_output("s = \"\" * 9000000000000000000\nprintln(len(s))", "0.0\n");
}

#[test]
fn indexing() {
    assert_output("a = [10, 20, 30]\nprintln(a[1])\nprintln(a[2.7])", "20.0\n30.0\n");
    assert_output("s = \"rill\"\nprintln(s[0])", "r\n");

    let err = assert_failure("a = [1]\nprintln(a[1])");
    assert!(matches!(err, Error::Runtime(RuntimeError::IndexOutOfBounds { len: 1, found: 1, line: 2 })));

    let err = assert_failure("a = [1]\nprintln(a[-1])");
    assert!(matches!(err, Error::Runtime(RuntimeError::IndexOutOfBounds { found: -1, .. })));
}

#[test]
fn array_methods_mutate_in_place() {
    let src = "var [] values = [3, 1, 2]
values.push(0)
values.sort()
println(values)
values.reverse()
println(values.join(\"-\"))
top = values.pop()
println(top)
println(values.len())
println(values.contains(2))";
    assert_output(src, "[0.0, 1.0, 2.0, 3.0]\n3.0-2.0-1.0-0.0\n0.0\n3.0\ntrue\n");
}

#[test]
fn method_calls_leave_copies_untouched() {
    assert_output("a = [1]\nb = a\nb.push(2)\nprintln(a)\nprintln(b)", "[1.0]\n[1.0, 2.0]\n");
}

#[test]
fn array_method_errors() {
    let err = assert_failure("a = []\na.pop()");
    assert!(matches!(err, Error::Runtime(RuntimeError::InvalidArgument { .. })));

    let err = assert_failure("a = [1, \"x\"]\na.sort()");
    assert!(matches!(err, Error::Runtime(RuntimeError::UnorderedComparison { .. })));

    let err = assert_failure("a = [1]\na.push()");
    assert!(matches!(err, Error::Runtime(RuntimeError::ArgumentCountMismatch { .. })));
}

#[test]
fn string_and_number_methods() {
    let src = "s = \"  Hi There  \"
t = s.trim()
println(t.upper())
println(t.lower())
println(t.len())
csv = \"a,b,c\"
println(csv.split(\",\"))
println(csv.contains(\"b,\"))
n = -2.5
println(n.abs())
println(n.floor())
println(n.ceil())
m = 16
println(m.sqrt())";
    assert_output(src,
                  "HI THERE\nhi there\n8.0\n[\"a\", \"b\", \"c\"]\ntrue\n2.5\n-3.0\n-2.0\n4.0\n");
}

#[test]
fn unknown_method_is_error() {
    let err = assert_failure("x = 1\nx.push(2)");
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::UnknownMethod { type_name: "number", .. })));
}

#[test]
fn builtins() {
    assert_output("print(\"a\", 1, [2])", "a 1.0 [2.0]\n");
    assert_output("println(\"a\", \"b\")\nprintln()", "a\nb\n\n");
    assert_output("println(len(\"hello\"), len([1, 2]))", "5.0\n2.0\n");
    assert_output("println(num(\" 2.5 \") + 1)", "3.5\n");
    assert_output("println(str(3) + \"!\")", "3.0!\n");

    let err = assert_failure("x = num(\"abc\")");
    assert!(matches!(err, Error::Runtime(RuntimeError::InvalidArgument { .. })));
}

#[test]
fn random_stays_in_range() {
    let buffer = SharedBuffer::default();
    let mut context = Context::with_output(buffer).with_seed(1);

    for _ in 0..20 {
        let value = run_with_context(&mut context, "r = random(1, 6)").unwrap().unwrap();
        let n = value.as_number(1).unwrap();

        assert!((1.0..=6.0).contains(&n));
        assert_eq!(n.fract(), 0.0);
    }

    assert_eq!(assert_success("r = random(4, 4)"), Some(Value::Number(4.0)));

    let err = assert_failure("r = random(6, 1)");
    assert!(matches!(err, Error::Runtime(RuntimeError::InvalidArgument { .. })));
}

#[test]
fn seeded_contexts_repeat_their_sequence() {
    let draw = |seed| {
        let mut context = Context::with_output(io::sink()).with_seed(seed);
        (0..5).map(|_| run_with_context(&mut context, "r = random(1, 1000)").unwrap())
              .collect::<Vec<_>>()
    };

    assert_eq!(draw(9), draw(9));
}

#[test]
fn function_definition_errors() {
    let err = assert_failure("function f() then\nend\nfunction f() then\nend");
    assert!(matches!(err, Error::Runtime(RuntimeError::FunctionAlreadyDefined { line: 3, .. })));

    let err = assert_failure("function println(x) then\nend");
    assert!(matches!(err, Error::Runtime(RuntimeError::BuiltinFunctionRedefinition { .. })));
}

#[test]
fn call_errors() {
    let err = assert_failure("function f(a, b) then\nend\nf(1)");
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { found: 1, .. })));

    let err = assert_failure("x = random(1)");
    assert!(matches!(err, Error::Runtime(RuntimeError::ArgumentCountMismatch { .. })));

    let err = assert_failure("missing(1)");
    assert!(matches!(err, Error::Runtime(RuntimeError::UnknownFunction { .. })));
}

#[test]
fn lexing_errors_surface_as_lex_errors() {
    let err = assert_failure("x = \"a%b\"");
    assert!(matches!(err, Error::Lex(LexError::IllegalCharacterInString { character: '%', .. })));

    let err = assert_failure("x = 1.");
    assert!(matches!(err, Error::Lex(LexError::MalformedNumber { .. })));

    let err = assert_failure("x = 3 # 2");
    assert!(matches!(err, Error::Lex(LexError::UnrecognizedCharacter { .. })));
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_output("% heading\n\n\nx = 1 % trailing\n\n% more\nprintln(x)\n\n", "1.0\n");
}

#[test]
fn runs_share_a_context() {
    let mut context = Context::with_output(io::sink());

    run_with_context(&mut context, "function double(n) then\n    return n * 2\nend").unwrap();
    let value = run_with_context(&mut context, "x = double(21)").unwrap();

    assert_eq!(value, Some(Value::Number(42.0)));
}

#[test]
fn example_script() {
    let script = fs::read_to_string("tests/example.rill").expect("missing file");
    assert_output(&script, "79.0\n95.0\nbest: 95.0\n");
}

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "rill"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let (Err(e), _) = run_capturing(&script) {
            panic!("Demo {path:?} failed:\n{script}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
