use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }
}

fn apply_op(lhs: f64, op: Op, rhs: f64) -> f64 {
    match op {
        Op::Add => lhs + rhs,
        Op::Sub => lhs - rhs,
        Op::Mul => lhs * rhs,
        Op::Div => lhs / rhs,
    }
}

fn format_result(value: f64) -> String {
    if value.is_nan() || value.is_infinite() {
        return "Error".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[component]
pub(super) fn CalculatorApp() -> impl IntoView {
    let display = create_rw_signal("0".to_string());
    let pending = create_rw_signal(None::<(f64, Op)>);
    let replace_on_digit = create_rw_signal(true);

    let press_digit = move |digit: &'static str| {
        display.update(|text| {
            if replace_on_digit.get_untracked() || text == "0" {
                *text = digit.to_string();
            } else {
                text.push_str(digit);
            }
        });
        replace_on_digit.set(false);
    };

    let press_op = move |op: Op| {
        let value = display.get_untracked().parse::<f64>().unwrap_or(0.0);
        let folded = match pending.get_untracked() {
            Some((lhs, prev_op)) => apply_op(lhs, prev_op, value),
            None => value,
        };
        display.set(format_result(folded));
        pending.set(Some((folded, op)));
        replace_on_digit.set(true);
    };

    let press_equals = move |_| {
        if let Some((lhs, op)) = pending.get_untracked() {
            let rhs = display.get_untracked().parse::<f64>().unwrap_or(0.0);
            display.set(format_result(apply_op(lhs, op, rhs)));
            pending.set(None);
            replace_on_digit.set(true);
        }
    };

    let press_clear = move |_| {
        display.set("0".to_string());
        pending.set(None);
        replace_on_digit.set(true);
    };

    let digit_button = move |digit: &'static str| {
        view! {
            <button class="calc-key" on:click=move |_| press_digit(digit)>{digit}</button>
        }
    };
    let op_button = move |op: Op| {
        view! {
            <button class="calc-key calc-op" on:click=move |_| press_op(op)>
                {op.symbol()}
            </button>
        }
    };

    view! {
        <div class="app app-calculator">
            <div class="calc-display" role="status">{move || display.get()}</div>
            <div class="calc-grid">
                <button class="calc-key calc-clear" on:click=press_clear>"C"</button>
                {op_button(Op::Div)}
                {op_button(Op::Mul)}
                {op_button(Op::Sub)}
                {digit_button("7")}
                {digit_button("8")}
                {digit_button("9")}
                {op_button(Op::Add)}
                {digit_button("4")}
                {digit_button("5")}
                {digit_button("6")}
                <button class="calc-key calc-equals" on:click=press_equals>"="</button>
                {digit_button("1")}
                {digit_button("2")}
                {digit_button("3")}
                {digit_button("0")}
                {digit_button(".")}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn operators_fold_left_to_right() {
        let partial = apply_op(2.0, Op::Add, 3.0);
        assert_eq!(apply_op(partial, Op::Mul, 4.0), 20.0);
    }

    #[test]
    fn division_by_zero_formats_as_error() {
        assert_eq!(format_result(apply_op(1.0, Op::Div, 0.0)), "Error");
    }

    #[test]
    fn whole_results_drop_the_decimal_point() {
        assert_eq!(format_result(6.0), "6");
        assert_eq!(format_result(2.5), "2.5");
    }
}
