//! The task records table.

use super::types::Task;

/// All documented tasks, in display order.
pub fn tasks() -> &'static [Task] {
    &TASKS
}

/// Look up a task by its identifier.
pub fn find_task(id: &str) -> Option<&'static Task> {
    TASKS.iter().find(|task| task.id == id)
}

static TASKS: [Task; 6] = [
    Task {
        id: "text-classification",
        label: "Text Classification",
        summary: "Assign a label to a piece of text, e.g. sentiment or topic.",
        datasets: &["stanfordnlp/imdb", "nyu-mll/glue"],
        metrics: &["accuracy", "f1"],
        models: &["distilbert/distilbert-base-uncased-finetuned-sst-2-english"],
    },
    Task {
        id: "text-generation",
        label: "Text Generation",
        summary: "Produce new text continuing or answering a prompt.",
        datasets: &["HuggingFaceFW/fineweb", "allenai/c4"],
        metrics: &["perplexity"],
        models: &["openai-community/gpt2", "meta-llama/Llama-3.1-8B-Instruct"],
    },
    Task {
        id: "question-answering",
        label: "Question Answering",
        summary: "Extract or generate an answer to a question over a context.",
        datasets: &["rajpurkar/squad_v2"],
        metrics: &["exact_match", "f1"],
        models: &["deepset/roberta-base-squad2"],
    },
    Task {
        id: "translation",
        label: "Translation",
        summary: "Convert text from one language to another.",
        datasets: &["wmt/wmt19", "Helsinki-NLP/opus-100"],
        metrics: &["bleu", "chrf"],
        models: &["google-t5/t5-base", "facebook/nllb-200-distilled-600M"],
    },
    Task {
        id: "text-to-image",
        label: "Text-to-Image",
        summary: "Generate an image from a natural-language description.",
        datasets: &["poloclub/diffusiondb"],
        metrics: &["fid", "clip_score"],
        models: &["stabilityai/stable-diffusion-xl-base-1.0"],
    },
    Task {
        id: "automatic-speech-recognition",
        label: "Automatic Speech Recognition",
        summary: "Transcribe spoken audio into text.",
        datasets: &["mozilla-foundation/common_voice_17_0", "openslr/librispeech_asr"],
        metrics: &["wer", "cer"],
        models: &["openai/whisper-large-v3"],
    },
];
