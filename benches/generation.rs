use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sitecraft::llm::prompts::{code_prompt, description_prompt};
use sitecraft::llm::strip_code_fence;
use sitecraft::{Theme, WebsiteOptions};

fn page(sections: usize) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head><title>Demo</title></head>\n<body>\n");
    for i in 0..sections {
        html.push_str(&format!(
            "<section id=\"s{i}\" class=\"p-8 bg-white\"><h2>Section {i}</h2><p>Lorem ipsum dolor sit amet.</p></section>\n"
        ));
    }
    html.push_str("</body>\n</html>");
    html
}

fn bench_strip_code_fence(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_code_fence");

    for sections in [1, 20, 200] {
        let fenced = format!("```html\n{}\n```", page(sections));
        group.bench_with_input(BenchmarkId::new("fenced", fenced.len()), &fenced, |b, text| {
            b.iter(|| strip_code_fence(black_box(text)))
        });
    }

    let bare = page(20);
    group.bench_with_input(BenchmarkId::new("bare", bare.len()), &bare, |b, text| {
        b.iter(|| strip_code_fence(black_box(text)))
    });

    group.finish();
}

fn bench_prompts(c: &mut Criterion) {
    let options = WebsiteOptions {
        site_type: "Landing Page".to_string(),
        style: "Futuristic".to_string(),
        theme: Theme::Dark,
        ..WebsiteOptions::default()
    };
    let description = "A bold hero with a gradient headline, three feature cards, \
                       a pricing table and a footer with social links."
        .repeat(4);

    c.bench_function("description_prompt", |b| {
        b.iter(|| description_prompt(black_box(&options)))
    });
    c.bench_function("code_prompt", |b| {
        b.iter(|| code_prompt(black_box(&options), black_box(&description)))
    });
}

criterion_group!(benches, bench_strip_code_fence, bench_prompts);
criterion_main!(benches);
