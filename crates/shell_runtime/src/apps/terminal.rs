use leptos::*;

const PROMPT: &str = "guest@halcyon:~$";

fn run_command(input: &str) -> Vec<String> {
    match input.trim() {
        "" => Vec::new(),
        "help" => vec!["Available commands: help, ls, whoami, sysinfo, clear".to_string()],
        "ls" => vec!["Documents  Downloads  Pictures  readme.txt".to_string()],
        "whoami" => vec!["guest".to_string()],
        "sysinfo" => vec![
            "OS: Halcyon Shell".to_string(),
            "Host: browser tab".to_string(),
            "Kernel: reducer 0.1".to_string(),
            "Uptime: this session".to_string(),
        ],
        other => vec![format!("{other}: command not found")],
    }
}

#[component]
pub(super) fn TerminalApp() -> impl IntoView {
    let lines = create_rw_signal(vec!["Type 'help' to get started.".to_string()]);
    let input = create_rw_signal(String::new());

    let submit = move || {
        let command = input.get_untracked();
        input.set(String::new());
        if command.trim() == "clear" {
            lines.set(Vec::new());
            return;
        }
        lines.update(|log| {
            log.push(format!("{PROMPT} {command}"));
            log.extend(run_command(&command));
        });
    };

    view! {
        <div class="app app-terminal">
            <div class="terminal-log">
                <For
                    each={move || lines.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, _)| *index
                    let:line
                >
                    <p class="terminal-line">{line.1}</p>
                </For>
            </div>
            <div class="terminal-input-row">
                <span class="terminal-prompt" aria-hidden="true">{PROMPT}</span>
                <input
                    type="text"
                    aria-label="Terminal input"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
            </div>
        </div>
    }
}
