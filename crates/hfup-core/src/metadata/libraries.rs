//! The library registry and its snippet templates.

use super::types::{Library, ModelInfo};

/// All libraries the snippet renderer knows about, in display order.
pub fn libraries() -> &'static [Library] {
    &LIBRARIES
}

/// Look up a library by its identifier.
pub fn find_library(id: &str) -> Option<&'static Library> {
    LIBRARIES.iter().find(|lib| lib.id == id)
}

static LIBRARIES: [Library; 6] = [
    Library {
        id: "transformers",
        label: "Transformers",
        repo_url: "https://github.com/huggingface/transformers",
        snippet: transformers_snippet,
    },
    Library {
        id: "diffusers",
        label: "Diffusers",
        repo_url: "https://github.com/huggingface/diffusers",
        snippet: diffusers_snippet,
    },
    Library {
        id: "sentence-transformers",
        label: "Sentence Transformers",
        repo_url: "https://github.com/UKPLab/sentence-transformers",
        snippet: sentence_transformers_snippet,
    },
    Library {
        id: "timm",
        label: "timm",
        repo_url: "https://github.com/huggingface/pytorch-image-models",
        snippet: timm_snippet,
    },
    Library {
        id: "peft",
        label: "PEFT",
        repo_url: "https://github.com/huggingface/peft",
        snippet: peft_snippet,
    },
    Library {
        id: "flair",
        label: "Flair",
        repo_url: "https://github.com/flairNLP/flair",
        snippet: flair_snippet,
    },
];

fn transformers_snippet(model: &ModelInfo) -> String {
    // Pipeline-style loading when the task is known, AutoModel otherwise.
    if let Some(task) = &model.pipeline_tag {
        format!(
            "from transformers import pipeline\n\npipe = pipeline(\"{task}\", model=\"{id}\")",
            id = model.id
        )
    } else {
        format!(
            "from transformers import AutoTokenizer, AutoModel\n\n\
             tokenizer = AutoTokenizer.from_pretrained(\"{id}\")\n\
             model = AutoModel.from_pretrained(\"{id}\")",
            id = model.id
        )
    }
}

fn diffusers_snippet(model: &ModelInfo) -> String {
    if model.has_tag("controlnet") {
        format!(
            "from diffusers import ControlNetModel\n\n\
             controlnet = ControlNetModel.from_pretrained(\"{id}\")",
            id = model.id
        )
    } else if model.has_tag("lora") {
        format!(
            "from diffusers import DiffusionPipeline\n\n\
             pipe = DiffusionPipeline.from_pretrained(\"stable-diffusion-v1-5/stable-diffusion-v1-5\")\n\
             pipe.load_lora_weights(\"{id}\")",
            id = model.id
        )
    } else {
        format!(
            "from diffusers import DiffusionPipeline\n\n\
             pipe = DiffusionPipeline.from_pretrained(\"{id}\")",
            id = model.id
        )
    }
}

fn sentence_transformers_snippet(model: &ModelInfo) -> String {
    format!(
        "from sentence_transformers import SentenceTransformer\n\n\
         model = SentenceTransformer(\"{id}\")\n\
         embeddings = model.encode([\"Hello, world!\"])",
        id = model.id
    )
}

fn timm_snippet(model: &ModelInfo) -> String {
    format!(
        "import timm\n\nmodel = timm.create_model(\"hf_hub:{id}\", pretrained=True)",
        id = model.id
    )
}

fn peft_snippet(model: &ModelInfo) -> String {
    format!(
        "from peft import PeftModel\n\
         from transformers import AutoModelForCausalLM\n\n\
         base = AutoModelForCausalLM.from_pretrained(\"<base model>\")\n\
         model = PeftModel.from_pretrained(base, \"{id}\")",
        id = model.id
    )
}

fn flair_snippet(model: &ModelInfo) -> String {
    format!(
        "from flair.models import SequenceTagger\n\n\
         tagger = SequenceTagger.load(\"{id}\")",
        id = model.id
    )
}
